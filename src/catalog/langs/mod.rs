// src/catalog/langs/mod.rs

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "src/catalog/langs/"]
pub struct Langs;

/// Locale codes for which an embedded catalog file exists.
pub fn available_locales() -> Vec<String> {
    Langs::iter()
        .filter_map(|f| {
            let filename = f.as_ref();
            filename.strip_suffix(".json").map(str::to_lowercase)
        })
        .collect()
}
