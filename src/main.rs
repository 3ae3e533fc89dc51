// src/main.rs - small CLI around the language manager
use ark_i18n::core::config::{ensure_config_exists, ConfigFile};
use ark_i18n::{Catalog, LanguageManager, Page, PageBuffer, Result, Slot, TomlStore};

fn main() -> Result<()> {
    let settings = ConfigFile::load()?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.general.log_level.clone()),
    )
    .init();

    let config_path = ensure_config_exists()?;
    log::debug!("Using config: {}", config_path.display());

    let mut manager = LanguageManager::new(Catalog::load()?, Box::new(TomlStore::new()));
    manager.subscribe(|locale| log::info!("Language changed to: {}", locale));

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("status") => status(&manager),
        Some("toggle") => {
            let locale = manager.toggle();
            println!("Language switched to: {}", locale);
        }
        Some("translate") => match args.get(1) {
            Some(key) => {
                let params: Vec<&str> = args.iter().skip(2).map(String::as_str).collect();
                println!("{}", manager.translate_with(key, &params));
            }
            None => eprintln!("Usage: ark-i18n translate <key> [params...]"),
        },
        Some("page") => match args.get(1).map(String::as_str).and_then(Page::from_name) {
            Some(page) => render_page(&mut manager, page),
            None => eprintln!(
                "Usage: ark-i18n page <home|wizard|recommendations|saved|discover|login|register|profile>"
            ),
        },
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Commands: status, toggle, translate <key>, page <name>");
        }
    }

    Ok(())
}

fn status(manager: &LanguageManager) {
    let available = ark_i18n::catalog::langs::available_locales().join(", ");
    println!("Current language: {}", manager.current_locale());
    println!("Toggle switches to: {}", manager.current_locale().toggle_label());
    println!("Available languages: {}", available);
    println!("Catalog keys: {}", manager.catalog().len());
}

/// Renders the shared navigation bar for `page` into a buffer and prints it.
fn render_page(manager: &mut LanguageManager, page: Page) {
    let mut buffer = PageBuffer::with_slots(
        Some(page),
        vec![
            Slot::text("nav.logo"),
            Slot::text("nav.home"),
            Slot::text("nav.my_collection"),
            Slot::text("nav.discover"),
            Slot::text("nav.login"),
        ],
    );
    manager.sync(&mut buffer);

    if let Some(title) = buffer.title() {
        println!("{}", title);
    }
    for key in [
        "nav.logo",
        "nav.home",
        "nav.my_collection",
        "nav.discover",
        "nav.login",
    ] {
        if let Some(text) = buffer.value(key) {
            println!("  {:24} {}", key, text);
        }
    }
}
