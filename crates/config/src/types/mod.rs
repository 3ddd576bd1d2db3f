//! Configuration type definitions for the keyboard shortcut layer.
//!
//! Responsibilities:
//! - Define keybinding override types and the loaded `KeyboardSettings`.
//! - Ensure consistent defaults and serde shapes for the settings file.
//!
//! Does NOT handle:
//! - Loading from files or environment variables (see `loader` module).
//! - Keybinding parsing or validation (see `keybind` module at crate root).
//!
//! Invariants:
//! - All maps and sets are ordered (`BTreeMap`/`BTreeSet`) for deterministic serialization.

pub mod keybind;
mod settings;

pub use keybind::KeybindOverrides;
pub use settings::{KeyboardSettings, PlatformPreference};
