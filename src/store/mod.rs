// src/store/mod.rs - locale preference persistence

pub mod toml_store;

pub use toml_store::TomlStore;

use crate::core::prelude::*;

/// Storage adapter for the persisted locale preference.
///
/// Injected into the `LanguageManager` at construction. Last-write-wins
/// overwrite semantics; a failing store is recoverable (the manager keeps
/// its in-memory state and logs the failure).
pub trait PreferenceStore {
    /// Reads the persisted locale, `Ok(None)` when nothing was saved yet.
    fn load(&self) -> Result<Option<Locale>>;

    /// Persists `locale`, overwriting any previous value.
    fn save(&mut self, locale: Locale) -> Result<()>;
}

/// In-memory store for tests and hosts without a writable filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<Locale>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self {
            saved: Some(locale),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Option<Locale>> {
        Ok(self.saved)
    }

    fn save(&mut self, locale: Locale) -> Result<()> {
        self.saved = Some(locale);
        Ok(())
    }
}
