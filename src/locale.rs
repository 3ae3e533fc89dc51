// src/locale.rs
use crate::core::error::{AppError, TranslationError};
use std::str::FromStr;

/// The two display languages the catalog is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    Zh,
    En,
}

impl Locale {
    /// Fallback locale when a key has no value for the active one.
    pub const DEFAULT: Locale = Locale::Zh;

    pub const ALL: [Locale; 2] = [Locale::Zh, Locale::En];

    /// The other locale. Applied twice it returns the original value.
    pub fn toggled(self) -> Locale {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// Label shown on a language toggle control: the language it switches TO.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Locale::Zh => "EN",
            Locale::En => "中",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zh" => Ok(Locale::Zh),
            "en" => Ok(Locale::En),
            other => Err(AppError::Translation(TranslationError::InvalidLocale(
                other.to_string(),
            ))),
        }
    }
}
