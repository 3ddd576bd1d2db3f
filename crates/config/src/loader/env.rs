//! Environment variable parsing for keyboard settings.
//!
//! Responsibilities:
//! - Read and parse `DEVTOOLBOX_*` environment variables.
//! - Apply their values to a `SettingsLoader` instance.
//!
//! Does NOT handle:
//! - Reading the settings file (see builder.rs).
//! - .env file loading (handled by `SettingsLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return `ConfigError::InvalidValue`.

use std::path::PathBuf;

use super::builder::SettingsLoader;
use super::error::ConfigError;
use crate::constants::{ENV_KEYMAP_FILE, ENV_LOG_DIR, ENV_PLATFORM, ENV_TELEMETRY};
use crate::types::PlatformPreference;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable settings to the loader.
///
/// Only fields not already set on the loader are filled, so builder calls
/// made before `from_env()` still win.
pub fn apply_env(loader: &mut SettingsLoader) -> Result<(), ConfigError> {
    if loader.settings_path().is_none()
        && let Some(path) = env_var_or_none(ENV_KEYMAP_FILE)
    {
        loader.set_settings_path(Some(PathBuf::from(path)));
    }
    if loader.platform().is_none()
        && let Some(platform) = env_var_or_none(ENV_PLATFORM)
    {
        let parsed = platform
            .parse::<PlatformPreference>()
            .map_err(|message| ConfigError::InvalidValue {
                var: ENV_PLATFORM.to_string(),
                message,
            })?;
        loader.set_platform(Some(parsed));
    }
    if loader.telemetry_enabled().is_none()
        && let Some(telemetry) = env_var_or_none(ENV_TELEMETRY)
    {
        let enabled = telemetry.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TELEMETRY.to_string(),
            message: "must be true or false".to_string(),
        })?;
        loader.set_telemetry_enabled(Some(enabled));
    }
    if loader.log_dir().is_none()
        && let Some(dir) = env_var_or_none(ENV_LOG_DIR)
    {
        loader.set_log_dir(Some(PathBuf::from(dir)));
    }
    Ok(())
}
