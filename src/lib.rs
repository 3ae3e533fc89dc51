//! Language management for BoardGame Ark.
//!
//! An embedded zh/en translation catalog plus a [`LanguageManager`] that
//! toggles between the two locales, persists the choice through a pluggable
//! [`PreferenceStore`], notifies subscribed observers, and resynchronizes
//! any [`RenderTarget`] the host wires up.

// Module definitions
pub mod catalog;
pub mod core;
pub mod locale;
pub mod manager;
pub mod render;
pub mod store;

// Essential re-exports
pub use catalog::{format_params, Catalog};
pub use crate::core::error::{AppError, Result, TranslationError};
pub use locale::Locale;
pub use manager::{LanguageManager, Subscription};
pub use render::{Page, PageBuffer, RenderTarget, Slot, SlotKind};
pub use store::{MemoryStore, PreferenceStore, TomlStore};
