// src/manager/mod.rs - language state, observers, and render sync
use crate::catalog::{format_params, Catalog};
use crate::core::constants::CACHE_MAX_ENTRIES;
use crate::core::prelude::*;
use crate::render::RenderTarget;
use crate::store::PreferenceStore;

pub mod cache;

use cache::TranslationCache;

/// Handle returned by [`LanguageManager::subscribe`]; pass it back to
/// [`LanguageManager::unsubscribe`] to drop the callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

type Observer = Box<dyn FnMut(Locale)>;

/// Central language state for one application instance.
///
/// Constructed once at startup with an injected [`PreferenceStore`]; there
/// is no ambient global. Every operation takes `&self`/`&mut self` on the
/// UI thread, so observer callbacks cannot re-enter the manager while a
/// toggle is in progress - re-entrant toggles are rejected by the borrow
/// rules rather than at runtime.
pub struct LanguageManager {
    locale: Locale,
    catalog: Catalog,
    store: Box<dyn PreferenceStore>,
    observers: Vec<(Subscription, Observer)>,
    next_subscription: u64,
    cache: TranslationCache,
}

impl std::fmt::Debug for LanguageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageManager")
            .field("locale", &self.locale)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl LanguageManager {
    /// Builds a manager whose initial locale comes from the store.
    ///
    /// An empty or unreadable store degrades to [`Locale::DEFAULT`] with a
    /// warning; persistence failures never prevent startup.
    pub fn new(catalog: Catalog, store: Box<dyn PreferenceStore>) -> Self {
        let locale = match store.load() {
            Ok(Some(saved)) => saved,
            Ok(None) => Locale::DEFAULT,
            Err(e) => {
                log::warn!("Failed to load language preference: {}", e);
                Locale::DEFAULT
            }
        };
        Self::with_locale(catalog, store, locale)
    }

    /// Builds a manager with an explicit initial locale, bypassing the store.
    pub fn with_locale(catalog: Catalog, store: Box<dyn PreferenceStore>, locale: Locale) -> Self {
        Self {
            locale,
            catalog,
            store,
            observers: Vec::new(),
            next_subscription: 0,
            cache: TranslationCache::new(CACHE_MAX_ENTRIES),
        }
    }

    pub fn current_locale(&self) -> Locale {
        self.locale
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read access to the injected store, mainly for status reporting.
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Flips the locale and returns the new value.
    ///
    /// Order per toggle: persist (last-write-wins, failures logged and
    /// swallowed), clear the cache, then invoke every observer in
    /// registration order with the new locale. Applied twice the locale
    /// is back where it started.
    pub fn toggle(&mut self) -> Locale {
        self.locale = self.locale.toggled();

        if let Err(e) = self.store.save(self.locale) {
            log::error!("Failed to save language preference: {}", e);
        }
        self.cache.clear();

        let locale = self.locale;
        for (_, observer) in &mut self.observers {
            observer(locale);
        }
        locale
    }

    /// Resolves `key` at the current locale. Missing keys degrade to the
    /// default locale and finally to the key itself (see [`Catalog::lookup`]).
    pub fn translate(&mut self, key: &str) -> String {
        if let Some(cached) = self.cache.get(key) {
            return cached;
        }
        let text = self.catalog.lookup(key, self.locale).to_string();
        self.cache.insert(key.to_string(), text.clone());
        text
    }

    /// [`translate`](Self::translate) plus positional parameter substitution.
    pub fn translate_with(&mut self, key: &str, params: &[&str]) -> String {
        if params.is_empty() {
            return self.translate(key);
        }
        let cache_key = format!("{}:{}", key, params.join(":"));
        if let Some(cached) = self.cache.get(&cache_key) {
            return cached;
        }
        let text = format_params(self.catalog.lookup(key, self.locale), params);
        self.cache.insert(cache_key, text.clone());
        text
    }

    /// Registers a locale-change callback, invoked on every toggle in
    /// registration order.
    pub fn subscribe(&mut self, observer: impl FnMut(Locale) + 'static) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((subscription, Box::new(observer)));
        subscription
    }

    /// Drops a registered callback. Returns whether it was still registered.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(s, _)| *s != subscription);
        self.observers.len() < before
    }

    /// Resynchronizes a render target with the current locale: resolves and
    /// applies every declared slot, sets the page title, and tags the root.
    pub fn sync<T: RenderTarget + ?Sized>(&mut self, target: &mut T) {
        for slot in target.slots() {
            let text = self.translate(&slot.key);
            target.apply(&slot, &text);
        }
        if let Some(page) = target.page() {
            let title = self.translate(page.title_key());
            target.set_title(&title);
        }
        target.set_root_locale(self.locale);
    }

    /// Toggle followed by a resync, preserving the observers-then-render
    /// ordering the toggle control relies on.
    pub fn toggle_and_sync<T: RenderTarget + ?Sized>(&mut self, target: &mut T) -> Locale {
        let locale = self.toggle();
        self.sync(target);
        locale
    }

    /// (hits, misses) of the translation cache.
    pub fn cache_stats(&self) -> (usize, usize) {
        self.cache.stats()
    }
}
