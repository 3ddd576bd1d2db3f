//! Configuration for the devtoolbox keyboard shortcut layer.
//!
//! This crate parses human-readable key strings, validates user keybinding
//! overrides, and loads `KeyboardSettings` from a settings file, environment
//! variables, and `.env`.

pub mod constants;
pub mod keybind;
mod loader;
pub mod types;

pub use keybind::{KeybindError, ModifierFlags, ParsedKey, parse_key, validate_overrides};
pub use loader::{ConfigError, SettingsLoader, default_settings_path, env_var_or_none};
pub use types::{KeybindOverrides, KeyboardSettings, PlatformPreference};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
