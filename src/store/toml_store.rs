// src/store/toml_store.rs - preference persistence in the TOML config file
use super::PreferenceStore;
use crate::core::config::{get_config_paths, ConfigFile, DEFAULT_CONFIG};
use crate::core::prelude::*;
use std::path::PathBuf;

/// File-backed [`PreferenceStore`] over the `[language]` section of the
/// application config.
///
/// Saving rewrites only the `current =` line and leaves every other line
/// of the file untouched, so user comments and unrelated sections survive.
/// When no config file exists yet, `save` creates the default config at the
/// primary path first; `load` yields `None` until something was saved.
#[derive(Debug)]
pub struct TomlStore {
    paths: Vec<PathBuf>,
}

impl TomlStore {
    /// Store probing the standard config locations.
    pub fn new() -> Self {
        Self {
            paths: get_config_paths(),
        }
    }

    /// Store over explicit candidate paths (first existing one wins).
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    fn rewrite_language_section(content: &str, locale: Locale) -> String {
        if !content.contains("[language]") {
            return format!(
                "{}\n\n[language]\ncurrent = \"{}\"\n",
                content.trim_end(),
                locale
            );
        }

        let mut in_language_section = false;
        content
            .lines()
            .map(|line| {
                let trimmed = line.trim();
                if trimmed.starts_with('[') && trimmed.ends_with(']') {
                    in_language_section = trimmed == "[language]";
                    return line.to_string();
                }
                if in_language_section && trimmed.starts_with("current") {
                    format!("current = \"{}\"", locale)
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TomlStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for TomlStore {
    fn load(&self) -> Result<Option<Locale>> {
        for path in &self.paths {
            if path.exists() {
                let content = std::fs::read_to_string(path).map_err(AppError::Io)?;
                let config = ConfigFile::parse(&content)?;
                return config.locale().map(Some);
            }
        }
        Ok(None)
    }

    fn save(&mut self, locale: Locale) -> Result<()> {
        for path in &self.paths {
            if path.exists() {
                let content = std::fs::read_to_string(path).map_err(AppError::Io)?;
                let updated = Self::rewrite_language_section(&content, locale);
                std::fs::write(path, updated).map_err(AppError::Io)?;
                log::debug!("Language '{}' saved to {}", locale, path.display());
                return Ok(());
            }
        }
        // First save: create the default config at the primary path.
        let Some(path) = self.paths.first() else {
            log::debug!("No config path configured, language '{}' not persisted", locale);
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(AppError::Io)?;
            }
        }
        let content = Self::rewrite_language_section(DEFAULT_CONFIG, locale);
        std::fs::write(path, content).map_err(AppError::Io)?;
        log::info!("Config file created: {}", path.display());
        Ok(())
    }
}
