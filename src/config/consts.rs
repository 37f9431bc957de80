// src/config/consts.rs

// Local document store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";

// Search
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_DOMAIN: &str = "example.com";
