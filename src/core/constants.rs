// src/core/constants.rs
pub const CONFIG_DIR: &str = ".ark";
pub const CONFIG_FILE: &str = "ark.toml";

/// Translation cache cap before a full clear (see manager::cache).
pub const CACHE_MAX_ENTRIES: usize = 1000;
