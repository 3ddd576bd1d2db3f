//! Keybinding override types.
//!
//! Responsibilities:
//! - Define `KeybindOverrides`, the user's replacement bindings keyed by command id.
//!
//! Does NOT handle:
//! - Keybinding parsing or validation (see `keybind` module at crate root).
//! - Applying overrides to commands (see the keyboard crate).
//!
//! Invariants:
//! - `KeybindOverrides` uses `BTreeMap` for deterministic serialization.
//! - An override replaces every default binding of its command.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-defined keybinding overrides.
///
/// Maps command ids (e.g. `"global.open-palette"`) to key strings. Only
/// commands listed here change; all others keep their built-in bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeybindOverrides {
    overrides: BTreeMap<String, Vec<String>>,
}

impl KeybindOverrides {
    /// Returns true if there are no overrides configured.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Get the override keys for a command, if any.
    pub fn get(&self, command_id: &str) -> Option<&[String]> {
        self.overrides.get(command_id).map(|keys| keys.as_slice())
    }

    /// Set the keys for a command, replacing any previous override.
    pub fn insert(&mut self, command_id: impl Into<String>, keys: Vec<String>) {
        self.overrides.insert(command_id.into(), keys);
    }

    /// Iterate overrides in command id order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.overrides.iter()
    }
}
