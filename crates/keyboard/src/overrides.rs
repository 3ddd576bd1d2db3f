//! Apply user keyboard settings to a command catalog.
//!
//! Responsibilities:
//! - Replace the bindings of commands named in `KeybindOverrides`.
//! - Drop commands listed as disabled.
//!
//! Does NOT handle:
//! - Parsing or validating the settings file (see `devtoolbox_config`).
//!
//! Invariants:
//! - An override for an id that is not in the catalog is an error.
//! - Commands keep their order; only bindings change.

use std::collections::HashSet;

use devtoolbox_config::{KeybindError, KeybindOverrides, KeyboardSettings};

use crate::command::Command;
use crate::key::KeyBinding;

/// Replace bindings of commands that have an override entry.
pub fn apply_overrides(
    commands: Vec<Command>,
    overrides: &KeybindOverrides,
) -> Result<Vec<Command>, KeybindError> {
    let known: HashSet<&str> = commands.iter().map(|command| command.id()).collect();
    if let Some((unknown, _)) = overrides.iter().find(|(id, _)| !known.contains(id.as_str())) {
        return Err(KeybindError::UnknownCommand {
            command: unknown.to_string(),
        });
    }

    commands
        .into_iter()
        .map(|command| {
            let Some(keys) = overrides.get(command.id()) else {
                return Ok(command);
            };
            let bindings = keys
                .iter()
                .map(|key| KeyBinding::parse(key))
                .collect::<Result<Vec<_>, _>>()?;
            tracing::debug!(command = command.id(), bindings = ?keys, "Applied keybinding override");
            Ok(command.with_bindings(bindings))
        })
        .collect()
}

/// Apply overrides, then remove disabled commands.
pub fn configure_commands(
    commands: Vec<Command>,
    settings: &KeyboardSettings,
) -> Result<Vec<Command>, KeybindError> {
    let commands = apply_overrides(commands, &settings.keybindings)?;

    for id in &settings.disabled_commands {
        if !commands.iter().any(|command| command.id() == id.as_str()) {
            tracing::warn!(command = %id, "Disabled command does not exist");
        }
    }

    Ok(commands
        .into_iter()
        .filter(|command| !settings.is_disabled(command.id()))
        .collect())
}
