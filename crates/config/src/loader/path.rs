//! Path helpers for the settings file location.
//!
//! Responsibilities:
//! - Determine the standard settings file path with the `directories` crate.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

use super::error::ConfigError;
use crate::constants::{APP_DIR_NAME, SETTINGS_FILE_NAME};

/// Returns the default path to the settings file.
///
/// - Linux: `~/.config/devtoolbox/keymap.json`
/// - macOS: `~/Library/Application Support/devtoolbox/keymap.json`
/// - Windows: `%AppData%\devtoolbox\config\keymap.json`
pub fn default_settings_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_DIR_NAME).ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory for the current user".to_string())
    })?;

    Ok(proj_dirs.config_dir().join(SETTINGS_FILE_NAME))
}
