//! Centralized constants for the devtoolbox keyboard workspace.
//!
//! Default values and environment variable names shared across crates.

// =============================================================================
// Settings file
// =============================================================================

/// Directory name used for the platform config directory.
pub const APP_DIR_NAME: &str = "devtoolbox";

/// File name of the keyboard settings file inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "keymap.json";

/// Default directory for the listener's rolling log file (relative to cwd).
pub const DEFAULT_LOG_DIR: &str = "logs";

// =============================================================================
// Environment variables
// =============================================================================

/// Overrides the settings file location.
pub const ENV_KEYMAP_FILE: &str = "DEVTOOLBOX_KEYMAP_FILE";

/// Forces the modifier convention (`auto`, `mac`, `other`).
pub const ENV_PLATFORM: &str = "DEVTOOLBOX_PLATFORM";

/// Enables invocation counters (`true`/`false`).
pub const ENV_TELEMETRY: &str = "DEVTOOLBOX_TELEMETRY";

/// Overrides the log directory.
pub const ENV_LOG_DIR: &str = "DEVTOOLBOX_LOG_DIR";

/// Skips `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
