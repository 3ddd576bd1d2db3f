//! Settings consumed by the keyboard shortcut layer.
//!
//! Responsibilities:
//! - Define `KeyboardSettings`, the merged result of defaults, the settings
//!   file, environment variables, and CLI flags.
//! - Define `PlatformPreference` for forcing Apple or non-Apple modifier handling.
//!
//! Does NOT handle:
//! - Merging sources (see `loader` module).
//!
//! Invariants:
//! - Every field has a default, so a partial settings file is valid.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::keybind::KeybindOverrides;
use crate::constants::DEFAULT_LOG_DIR;

/// Which modifier convention to use for the logical "Mod" key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformPreference {
    /// Detect from the host.
    #[default]
    Auto,
    /// Command key is the mod key.
    Mac,
    /// Control key is the mod key.
    Other,
}

impl fmt::Display for PlatformPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Mac => write!(f, "mac"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for PlatformPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "mac" | "macos" | "apple" => Ok(Self::Mac),
            "other" | "pc" | "linux" | "windows" => Ok(Self::Other),
            other => Err(format!(
                "unknown platform '{other}', expected auto, mac, or other"
            )),
        }
    }
}

/// Keyboard shortcut settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardSettings {
    /// Modifier convention for "Mod" bindings.
    pub platform: PlatformPreference,
    /// Emit invocation counters through the `metrics` facade.
    pub telemetry_enabled: bool,
    /// Directory for the listener's rolling log file.
    pub log_dir: PathBuf,
    /// Replacement bindings keyed by command id.
    pub keybindings: KeybindOverrides,
    /// Command ids that are never registered.
    pub disabled_commands: BTreeSet<String>,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            platform: PlatformPreference::Auto,
            telemetry_enabled: false,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            keybindings: KeybindOverrides::default(),
            disabled_commands: BTreeSet::new(),
        }
    }
}

impl KeyboardSettings {
    pub fn is_disabled(&self, command_id: &str) -> bool {
        self.disabled_commands.contains(command_id)
    }
}
