//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` for hierarchical settings merging.
//! - Read the JSON settings file and layer env/builder values on top.
//! - Validate keybinding overrides before handing settings out.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables, which take
//!   precedence over the settings file.
//! - A missing file at the default location yields defaults; a missing file at
//!   an explicitly configured location is an error.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::{Path, PathBuf};

use super::env::apply_env;
use super::error::ConfigError;
use super::path::default_settings_path;
use crate::constants::ENV_DOTENV_DISABLED;
use crate::keybind::validate_overrides;
use crate::types::{KeyboardSettings, PlatformPreference};

/// Loader that builds `KeyboardSettings` from a file, env vars, and explicit values.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    settings_path: Option<PathBuf>,
    platform: Option<PlatformPreference>,
    telemetry_enabled: Option<bool>,
    log_dir: Option<PathBuf>,
}

impl SettingsLoader {
    /// Create a new settings loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but cannot be parsed or read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read the settings file from an explicit location.
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    pub fn with_platform(mut self, platform: PlatformPreference) -> Self {
        self.platform = Some(platform);
        self
    }

    pub fn with_telemetry_enabled(mut self, enabled: bool) -> Self {
        self.telemetry_enabled = Some(enabled);
        self
    }

    pub fn with_log_dir(mut self, dir: PathBuf) -> Self {
        self.log_dir = Some(dir);
        self
    }

    /// Apply `DEVTOOLBOX_*` environment variables to fields not set yet.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub(crate) fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    pub(crate) fn set_settings_path(&mut self, path: Option<PathBuf>) {
        self.settings_path = path;
    }

    pub(crate) fn platform(&self) -> Option<PlatformPreference> {
        self.platform
    }

    pub(crate) fn set_platform(&mut self, platform: Option<PlatformPreference>) {
        self.platform = platform;
    }

    pub(crate) fn telemetry_enabled(&self) -> Option<bool> {
        self.telemetry_enabled
    }

    pub(crate) fn set_telemetry_enabled(&mut self, enabled: Option<bool>) {
        self.telemetry_enabled = enabled;
    }

    pub(crate) fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }

    pub(crate) fn set_log_dir(&mut self, dir: Option<PathBuf>) {
        self.log_dir = dir;
    }

    /// Build the final settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed, or if
    /// its keybinding overrides fail validation.
    pub fn build(self) -> Result<KeyboardSettings, ConfigError> {
        let mut settings = match self.settings_path {
            Some(ref path) => read_settings_file(path)?,
            None => match default_settings_path() {
                Ok(path) if path.exists() => read_settings_file(&path)?,
                Ok(_) => KeyboardSettings::default(),
                Err(e) => {
                    tracing::debug!("No default settings location: {}", e);
                    KeyboardSettings::default()
                }
            },
        };

        if let Some(platform) = self.platform {
            settings.platform = platform;
        }
        if let Some(enabled) = self.telemetry_enabled {
            settings.telemetry_enabled = enabled;
        }
        if let Some(dir) = self.log_dir {
            settings.log_dir = dir;
        }

        validate_overrides(&settings.keybindings)?;

        tracing::debug!(
            platform = %settings.platform,
            telemetry = settings.telemetry_enabled,
            overrides = settings.keybindings.len(),
            disabled = settings.disabled_commands.len(),
            "Loaded keyboard settings"
        );

        Ok(settings)
    }
}

fn read_settings_file(path: &Path) -> Result<KeyboardSettings, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}
