//! Human-readable shortcut labels for help overlays and the CLI listing.
//!
//! Responsibilities:
//! - Render a `KeyBinding` with the platform's modifier conventions.
//! - Project a `Command` into a serializable `CommandDisplayInfo`.
//!
//! Invariants:
//! - Apple-like platforms use glyphs with no separator (`⌘⇧C`); others use
//!   words joined with `+` (`Ctrl+Shift+C`).

use serde::Serialize;

use crate::command::{Category, Command};
use crate::context::Context;
use crate::key::{KeyBinding, Modifiers};
use crate::platform::Platform;

/// What help output needs to know about one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDisplayInfo {
    pub id: String,
    pub keys: Vec<String>,
    pub description: String,
    pub category: Category,
    pub contexts: Vec<Context>,
}

pub(crate) fn display_info(command: &Command, platform: &dyn Platform) -> CommandDisplayInfo {
    CommandDisplayInfo {
        id: command.id().to_string(),
        keys: command
            .bindings()
            .iter()
            .map(|binding| format_binding(binding, platform))
            .collect(),
        description: command.description().to_string(),
        category: command.category(),
        contexts: command.contexts().to_vec(),
    }
}

/// Render one binding, e.g. `⌘K` or `Ctrl+K`.
pub fn format_binding(binding: &KeyBinding, platform: &dyn Platform) -> String {
    let apple = platform.is_apple_like();
    let modifiers = binding.modifiers();
    let key = binding.key();

    let mut parts: Vec<&str> = Vec::new();
    if binding.requests_mod() {
        parts.push(if apple { "⌘" } else { "Ctrl" });
    }
    // Shifted symbols such as `?` already imply Shift.
    if modifiers.contains(Modifiers::SHIFT) && !is_single_symbol(key) {
        parts.push(if apple { "⇧" } else { "Shift" });
    }
    if modifiers.contains(Modifiers::ALT) {
        parts.push(if apple { "⌥" } else { "Alt" });
    }

    let key = format_key(key);
    parts.push(&key);
    parts.join(if apple { "" } else { "+" })
}

fn format_key(key: &str) -> String {
    let glyph = match key {
        "ArrowUp" => "↑",
        "ArrowDown" => "↓",
        "ArrowLeft" => "←",
        "ArrowRight" => "→",
        "Escape" => "Esc",
        "Backspace" => "⌫",
        "Enter" => "↵",
        " " | "Space" => "Space",
        _ if key.chars().count() == 1 => return key.to_uppercase(),
        _ => key,
    };
    glyph.to_string()
}

fn is_single_symbol(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if !c.is_alphanumeric())
}
