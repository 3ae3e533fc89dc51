// src/core/prelude.rs

// Core essentials - needed everywhere
pub use crate::core::error::{AppError, Result, TranslationError};
pub use crate::locale::Locale;
