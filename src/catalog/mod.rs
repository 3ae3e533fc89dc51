// src/catalog/mod.rs - static translation table
use crate::core::prelude::*;
use lazy_static::lazy_static;
use std::collections::HashMap;

pub mod langs;

lazy_static! {
    static ref EMBEDDED: Catalog = match Catalog::load() {
        Ok(catalog) => catalog,
        Err(e) => {
            // Lookup stays total: an empty catalog degrades every key
            // to its raw-key fallback instead of halting the host.
            log::error!("Failed to load embedded catalogs: {}", e);
            Catalog::empty()
        }
    };
}

/// Read-only mapping from dot-separated translation keys to per-locale text.
///
/// Keys are opaque identifiers; the hierarchy in names like
/// `wizard.welcome_title` is a naming convention, not structure.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl Catalog {
    fn empty() -> Self {
        Self {
            tables: Locale::ALL.iter().map(|&l| (l, HashMap::new())).collect(),
        }
    }

    /// Parses the embedded JSON catalog for every supported locale.
    pub fn load() -> Result<Self> {
        let mut tables = HashMap::new();
        for locale in Locale::ALL {
            tables.insert(locale, Self::load_table(locale)?);
        }
        Ok(Self { tables })
    }

    fn load_table(locale: Locale) -> Result<HashMap<String, String>> {
        let filename = format!("{}.json", locale.as_str());
        let content = langs::Langs::get(&filename).ok_or_else(|| {
            AppError::Translation(TranslationError::LoadError(format!(
                "File not found: {}",
                filename
            )))
        })?;

        let content_str = std::str::from_utf8(content.data.as_ref())
            .map_err(|e| AppError::Translation(TranslationError::LoadError(e.to_string())))?;

        serde_json::from_str(content_str)
            .map_err(|e| AppError::Translation(TranslationError::LoadError(e.to_string())))
    }

    /// The shared catalog built from the embedded language files.
    pub fn embedded() -> &'static Catalog {
        &EMBEDDED
    }

    /// Builds a catalog from explicit per-locale tables. Locales without a
    /// table resolve through the usual fallback chain.
    pub fn from_tables(tables: HashMap<Locale, HashMap<String, String>>) -> Self {
        let mut catalog = Self::empty();
        for (locale, table) in tables {
            catalog.tables.insert(locale, table);
        }
        catalog
    }

    /// Builds a catalog from `(key, zh, en)` triples. Intended for tests and
    /// hosts that author their own table.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, S, S)>,
        S: Into<String>,
    {
        let mut catalog = Self::empty();
        for (key, zh, en) in entries {
            let key = key.into();
            if let Some(table) = catalog.tables.get_mut(&Locale::Zh) {
                table.insert(key.clone(), zh.into());
            }
            if let Some(table) = catalog.tables.get_mut(&Locale::En) {
                table.insert(key, en.into());
            }
        }
        catalog
    }

    /// Resolves `key` in `locale`, falling back to the default locale and
    /// finally to the raw key itself.
    ///
    /// Total over all inputs: never panics, never errors. Each fallback
    /// emits one `log::warn!` diagnostic.
    pub fn lookup<'a>(&'a self, key: &'a str, locale: Locale) -> &'a str {
        if let Some(text) = self.tables.get(&locale).and_then(|t| t.get(key)) {
            return text;
        }

        if let Some(text) = self.tables.get(&Locale::DEFAULT).and_then(|t| t.get(key)) {
            log::warn!(
                "Translation missing for key '{}' in locale '{}', using '{}'",
                key,
                locale,
                Locale::DEFAULT
            );
            return text;
        }

        log::warn!("Translation missing for key: {}", key);
        key
    }

    /// Whether any locale carries a value for `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.tables.values().any(|t| t.contains_key(key))
    }

    /// Number of keys authored in the default locale.
    pub fn len(&self) -> usize {
        self.tables
            .get(&Locale::DEFAULT)
            .map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys authored in the default locale, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tables
            .get(&Locale::DEFAULT)
            .into_iter()
            .flat_map(|t| t.keys().map(String::as_str))
    }
}

/// Substitutes positional parameters into a resolved string.
///
/// `{0}`, `{1}`, ... address parameters by index; each bare `{}` consumes
/// the next parameter in order. Plain substitution only, no plural rules.
pub fn format_params(template: &str, params: &[&str]) -> String {
    params
        .iter()
        .enumerate()
        .fold(template.to_string(), |mut text, (i, param)| {
            text = text.replace(&format!("{{{}}}", i), param);
            if text.contains("{}") {
                text = text.replacen("{}", param, 1);
            }
            text
        })
}
