//! Settings loader for environment variables and files.
//!
//! Responsibilities:
//! - Load keyboard settings from `.env` files, environment variables, and a JSON settings file.
//! - Provide a builder-pattern `SettingsLoader` for hierarchical merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Writing settings back to disk.
//! - Applying overrides to commands (see the keyboard crate).
//!
//! Invariants / Assumptions:
//! - Precedence: builder methods > environment variables > settings file > defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod path;

pub use builder::SettingsLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use path::default_settings_path;

#[cfg(test)]
mod tests;
