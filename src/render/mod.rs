// src/render/mod.rs - rendering adapter between the manager and the host UI
use crate::core::prelude::*;
use std::collections::HashMap;

/// How a resolved translation is applied to a surface element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Replaces the element's text content.
    Text,
    /// Replaces the placeholder of an input-like element.
    Placeholder,
    /// Replaces inner markup. The host must only bind keys whose authored
    /// values are safe markup; the catalog does not sanitize.
    Markup,
}

/// One translatable surface element: a key plus how to apply it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub key: String,
    pub kind: SlotKind,
}

impl Slot {
    pub fn text(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: SlotKind::Text,
        }
    }

    pub fn placeholder(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: SlotKind::Placeholder,
        }
    }

    pub fn markup(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind: SlotKind::Markup,
        }
    }
}

/// Application pages with an authored `title.*` catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Wizard,
    Recommendations,
    Saved,
    Discover,
    Login,
    Register,
    Profile,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Wizard,
        Page::Recommendations,
        Page::Saved,
        Page::Discover,
        Page::Login,
        Page::Register,
        Page::Profile,
    ];

    /// Catalog key holding the full localized title for this page.
    pub fn title_key(self) -> &'static str {
        match self {
            Page::Home => "title.home",
            Page::Wizard => "title.wizard",
            Page::Recommendations => "title.recommendations",
            Page::Saved => "title.saved",
            Page::Discover => "title.discover",
            Page::Login => "title.login",
            Page::Register => "title.register",
            Page::Profile => "title.profile",
        }
    }

    pub fn from_name(name: &str) -> Option<Page> {
        match name.trim().to_lowercase().as_str() {
            "home" => Some(Page::Home),
            "wizard" => Some(Page::Wizard),
            "recommendations" => Some(Page::Recommendations),
            "saved" => Some(Page::Saved),
            "discover" => Some(Page::Discover),
            "login" => Some(Page::Login),
            "register" => Some(Page::Register),
            "profile" => Some(Page::Profile),
            _ => None,
        }
    }
}

/// Adapter the host UI implements so the manager can resynchronize it.
///
/// `LanguageManager::sync` resolves every declared slot and applies it,
/// then sets the page title and the root locale tag. A target with zero
/// slots is fine; sync simply does nothing for it.
pub trait RenderTarget {
    /// Slots currently present on the surface.
    fn slots(&self) -> Vec<Slot>;

    /// Applies one resolved translation to the surface.
    fn apply(&mut self, slot: &Slot, text: &str);

    /// Page identity for title resolution, if the surface has a title.
    fn page(&self) -> Option<Page> {
        None
    }

    fn set_title(&mut self, _title: &str) {}

    /// Locale tag on the surface root (the `lang` attribute analog).
    fn set_root_locale(&mut self, _locale: Locale) {}
}

/// In-memory [`RenderTarget`]: the reference adapter used by the CLI
/// binary and the test suite.
#[derive(Debug, Default)]
pub struct PageBuffer {
    page: Option<Page>,
    slots: Vec<Slot>,
    values: HashMap<String, String>,
    title: Option<String>,
    root_locale: Option<Locale>,
}

impl PageBuffer {
    pub fn new(page: Option<Page>) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    pub fn push_slot(&mut self, slot: Slot) {
        self.slots.push(slot);
    }

    pub fn with_slots(page: Option<Page>, slots: Vec<Slot>) -> Self {
        Self {
            page,
            slots,
            ..Self::default()
        }
    }

    /// Last text applied for `key`, if the slot was synced.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn root_locale(&self) -> Option<Locale> {
        self.root_locale
    }
}

impl RenderTarget for PageBuffer {
    fn slots(&self) -> Vec<Slot> {
        self.slots.clone()
    }

    fn apply(&mut self, slot: &Slot, text: &str) {
        self.values.insert(slot.key.clone(), text.to_string());
    }

    fn page(&self) -> Option<Page> {
        self.page
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_root_locale(&mut self, locale: Locale) {
        self.root_locale = Some(locale);
    }
}
