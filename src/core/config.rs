// src/core/config.rs - TOML settings for the host application
use crate::core::constants::{CONFIG_DIR, CONFIG_FILE};
use crate::core::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub(crate) const DEFAULT_CONFIG: &str = r#"[general]
log_level = "info"

[language]
current = "zh"
"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub general: GeneralSection,
    #[serde(default)]
    pub language: LanguageSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSection {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageSection {
    #[serde(default = "default_locale_code")]
    pub current: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_locale_code() -> String {
    Locale::DEFAULT.as_str().to_string()
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for LanguageSection {
    fn default() -> Self {
        Self {
            current: default_locale_code(),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            general: GeneralSection::default(),
            language: LanguageSection::default(),
        }
    }
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Validation(format!("Invalid config file: {}", e)))
    }

    /// Loads the first existing config file, or defaults when none exists.
    pub fn load() -> Result<Self> {
        for path in get_config_paths() {
            if path.exists() {
                let content = std::fs::read_to_string(&path).map_err(AppError::Io)?;
                return Self::parse(&content);
            }
        }
        Ok(Self::default())
    }

    pub fn locale(&self) -> Result<Locale> {
        self.language.current.parse()
    }
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(base_dir) = exe_path.parent() {
            paths.push(base_dir.join(CONFIG_DIR).join(CONFIG_FILE));
            paths.push(base_dir.join(CONFIG_FILE));
            paths.push(base_dir.join("config").join(CONFIG_FILE));
        }
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE));
    }
    paths
}

/// Creates the default config next to the executable on first run.
pub fn ensure_config_exists() -> Result<PathBuf> {
    if let Some(existing) = get_config_paths().into_iter().find(|p| p.exists()) {
        return Ok(existing);
    }

    let exe_path = std::env::current_exe().map_err(AppError::Io)?;
    let base_dir = exe_path
        .parent()
        .ok_or_else(|| AppError::Validation("Cannot resolve executable directory".into()))?;

    let config_dir = base_dir.join(CONFIG_DIR);
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).map_err(AppError::Io)?;
        log::debug!("Config directory created: {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE);
    std::fs::write(&config_path, DEFAULT_CONFIG).map_err(AppError::Io)?;
    log::info!("Config file created: {}", config_path.display());

    Ok(config_path)
}
