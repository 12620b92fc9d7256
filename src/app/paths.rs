// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! This module provides a single source of truth for application data paths,
//! ensuring consistent directory usage across all components.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`BOOKSHELF_DATA_DIR`, `BOOKSHELF_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The explicit override has highest priority because it's the most specific -
//! when code explicitly passes a path, it should always be respected.
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.data_dir, flags.config_dir);
//! ```
//!
//! After initialization, all path functions will respect the CLI overrides
//! (unless an explicit override is passed).

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Bookshelf";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "BOOKSHELF_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "BOOKSHELF_CONFIG_DIR";

/// Global CLI override for data directory (set once at startup).
static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for data and config directories.
///
/// This should be called once at application startup, before any path
/// resolution functions are called. Later calls are ignored with a warning.
///
/// # Arguments
///
/// * `data_dir` - Optional data directory from `--data-dir` CLI argument
/// * `config_dir` - Optional config directory from `--config-dir` CLI argument
pub fn init_cli_overrides(data_dir: Option<PathBuf>, config_dir: Option<PathBuf>) {
    if CLI_DATA_DIR.set(data_dir).is_err() {
        log::warn!("CLI data dir override already initialized");
    }
    if CLI_CONFIG_DIR.set(config_dir).is_err() {
        log::warn!("CLI config dir override already initialized");
    }
}

/// Returns the CLI override for data directory, if set.
fn get_cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

/// Returns the CLI override for config directory, if set.
fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Log file written in the data directory.
pub const LOG_FILE: &str = "bookshelf.log";

/// Returns the application data directory path.
///
/// This directory holds the log file ([`LOG_FILE`]).
/// User preferences live separately in the config directory, read by `config::load`.
///
/// # Resolution Order
///
/// 1. CLI argument `--data-dir` (if set via [`init_cli_overrides`])
/// 2. `BOOKSHELF_DATA_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific data directory:
///    - Linux: `~/.local/share/Bookshelf/`
///    - macOS: `~/Library/Application Support/Bookshelf/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\Bookshelf\`
///
/// Returns `None` if the data directory cannot be determined (rare edge case).
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
///
/// The override takes priority over everything else; see [`get_app_data_dir`]
/// for the remaining order.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(override_path, get_cli_data_dir(), ENV_DATA_DIR, dirs::data_dir)
}

/// Returns the application config directory path.
///
/// This directory holds user preferences (`settings.toml`).
///
/// # Resolution Order
///
/// 1. CLI argument `--config-dir` (if set via [`init_cli_overrides`])
/// 2. `BOOKSHELF_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory:
///    - Linux: `~/.config/Bookshelf/`
///    - macOS: `~/Library/Application Support/Bookshelf/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\Bookshelf\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        get_cli_config_dir(),
        ENV_CONFIG_DIR,
        dirs::config_dir,
    )
}

/// Returns the log file path inside the data directory.
pub fn get_log_file() -> Option<PathBuf> {
    get_app_data_dir().map(|dir| dir.join(LOG_FILE))
}

fn resolve(
    override_path: Option<PathBuf>,
    cli_path: Option<PathBuf>,
    env_var: &str,
    platform_dir: fn() -> Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = override_path.or(cli_path) {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(env_var) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    platform_dir().map(|path| path.join(APP_NAME))
}
