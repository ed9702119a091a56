//! XDG-style path utilities for configuration and cache directories.
//!
//! Prefers XDG Base Directory Specification conventions over OS-specific
//! locations so the config and the daily-quote database land in predictable
//! places.

use std::path::PathBuf;

const APP_DIR: &str = "mingala";

/// Returns the configuration directory for mingala.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/mingala` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/mingala` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| home_dir().join(".config").join(APP_DIR),
        |xdg| PathBuf::from(xdg).join(APP_DIR),
    )
}

/// Returns the cache directory for mingala.
///
/// Resolution order:
/// 1. `$XDG_CACHE_HOME/mingala` if `XDG_CACHE_HOME` is set
/// 2. `~/.cache/mingala` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
pub fn cache_dir() -> PathBuf {
    std::env::var("XDG_CACHE_HOME").map_or_else(
        |_| home_dir().join(".cache").join(APP_DIR),
        |xdg| PathBuf::from(xdg).join(APP_DIR),
    )
}

/// Returns the path of the daily-quote database inside the cache directory.
pub fn daily_db_path() -> PathBuf {
    cache_dir().join("daily.db")
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}
