//! Keybinding parsing and validation.
//!
//! Responsibilities:
//! - Parse human-readable key strings ("Mod+Shift+K", "Escape", "j") into
//!   browser key identifiers plus modifier flags.
//! - Validate keybinding overrides for conflicts, reserved chords, and invalid syntax.
//!
//! Does NOT handle:
//! - Runtime key event matching (see the keyboard crate).
//! - Applying overrides to command definitions (see the keyboard crate).

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::types::keybind::KeybindOverrides;

/// Errors that can occur when parsing or validating keybindings.
#[derive(Debug, Error, PartialEq)]
pub enum KeybindError {
    /// Invalid key syntax
    #[error("Invalid key syntax: '{key}'. Expected format like 'k', 'Mod+k', 'Shift+?', 'Escape'")]
    InvalidSyntax {
        /// The invalid key string
        key: String,
    },

    /// Unknown key name
    #[error("Unknown key name: '{name}'")]
    UnknownKey {
        /// The unknown key name
        name: String,
    },

    /// Conflicting keybindings
    #[error("Conflicting keybindings: '{key}' is assigned to both {command1} and {command2}")]
    Conflict {
        /// The conflicting key
        key: String,
        /// First command using this key
        command1: String,
        /// Second command using this key
        command2: String,
    },

    /// Reserved keybinding
    #[error("Reserved keybinding: '{key}' cannot be overridden")]
    ReservedKey {
        /// The reserved key
        key: String,
    },

    /// An override entry without any key strings
    #[error("Keybinding override for '{command}' lists no keys")]
    EmptyBindings {
        /// The command id with the empty list
        command: String,
    },

    /// An override for a command that is not registered
    #[error("Keybinding override refers to unknown command '{command}'")]
    UnknownCommand {
        /// The unknown command id
        command: String,
    },
}

/// A parsed key combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedKey {
    /// Browser key identifier (`"k"`, `"ArrowUp"`, `"Escape"`, `" "`).
    pub key: String,
    /// Modifier flags
    pub modifiers: ModifierFlags,
}

impl ParsedKey {
    /// Comparison form: ctrl and meta collapse into `mod`, key lowercased.
    pub fn canonical(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        if self.modifiers.ctrl || self.modifiers.meta {
            parts.push("mod".to_string());
        }
        if self.modifiers.shift {
            parts.push("shift".to_string());
        }
        if self.modifiers.alt {
            parts.push("alt".to_string());
        }
        parts.push(self.key.to_lowercase());
        parts.join("+")
    }
}

impl fmt::Display for ParsedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = if self.key == " " { "Space" } else { &self.key };
        if self.modifiers.is_empty() {
            write!(f, "{}", key)
        } else {
            write!(f, "{}+{}", self.modifiers, key)
        }
    }
}

/// Modifier flags for key combinations.
///
/// `ctrl` and `meta` are kept apart here; the matcher collapses them into one
/// platform-dependent "mod" key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModifierFlags {
    /// Control key requested (or the logical "Mod" token)
    pub ctrl: bool,
    /// Meta/Command key requested
    pub meta: bool,
    /// Shift key requested
    pub shift: bool,
    /// Alt/Option key requested
    pub alt: bool,
}

impl ModifierFlags {
    /// True when no modifier is requested.
    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.meta || self.shift || self.alt)
    }
}

impl fmt::Display for ModifierFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.meta {
            parts.push("Meta");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.alt {
            parts.push("Alt");
        }
        if parts.is_empty() {
            write!(f, "None")
        } else {
            write!(f, "{}", parts.join("+"))
        }
    }
}

/// Parse a key string like "Mod+k", "Shift+?", "Escape" into structured form.
///
/// `Mod` (and its alias `CmdOrCtrl`) requests the platform command key; it is
/// stored as `ctrl`, which the matcher treats as the logical mod key.
///
/// # Examples
///
/// ```
/// use devtoolbox_config::keybind::parse_key;
///
/// let key = parse_key("Mod+Shift+c").unwrap();
/// assert_eq!(key.key, "c");
/// assert!(key.modifiers.ctrl);
/// assert!(key.modifiers.shift);
///
/// let key = parse_key("esc").unwrap();
/// assert_eq!(key.key, "Escape");
/// ```
pub fn parse_key(key_str: &str) -> Result<ParsedKey, KeybindError> {
    let key_str = key_str.trim();

    if key_str.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    // A bare "+" is the plus key, not a separator
    if key_str == "+" {
        return Ok(ParsedKey {
            key: "+".to_string(),
            modifiers: ModifierFlags::default(),
        });
    }

    let parts: Vec<&str> = key_str.split('+').map(|s| s.trim()).collect();

    let mut modifiers = ModifierFlags::default();
    let mut key_name = "";

    for part in &parts {
        match part.to_ascii_lowercase().as_str() {
            "mod" | "cmdorctrl" => modifiers.ctrl = true,
            "ctrl" | "control" => modifiers.ctrl = true,
            "meta" | "cmd" | "command" | "super" => modifiers.meta = true,
            "shift" => modifiers.shift = true,
            "alt" | "option" => modifiers.alt = true,
            _ => {
                if key_name.is_empty() {
                    key_name = *part;
                } else {
                    // Multiple non-modifier parts is invalid
                    return Err(KeybindError::InvalidSyntax {
                        key: key_str.to_string(),
                    });
                }
            }
        }
    }

    if key_name.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    let key = parse_key_name(key_name)?;

    Ok(ParsedKey { key, modifiers })
}

/// Parse a key name (without modifiers) into a browser key identifier.
fn parse_key_name(name: &str) -> Result<String, KeybindError> {
    let name_lower = name.to_ascii_lowercase();

    let named = match name_lower.as_str() {
        "esc" | "escape" => Some("Escape"),
        "enter" | "return" => Some("Enter"),
        "space" | "spacebar" => Some(" "),
        "tab" => Some("Tab"),
        "backspace" => Some("Backspace"),
        "delete" | "del" => Some("Delete"),
        "insert" | "ins" => Some("Insert"),
        "home" => Some("Home"),
        "end" => Some("End"),
        "pageup" | "page_up" | "pgup" => Some("PageUp"),
        "pagedown" | "page_down" | "pgdn" => Some("PageDown"),
        "up" | "arrowup" => Some("ArrowUp"),
        "down" | "arrowdown" => Some("ArrowDown"),
        "left" | "arrowleft" => Some("ArrowLeft"),
        "right" | "arrowright" => Some("ArrowRight"),
        "plus" => Some("+"),
        _ => None,
    };
    if let Some(named) = named {
        return Ok(named.to_string());
    }

    // Function keys F1-F12 (the browser reports them as "F1".."F12")
    if let Some(num_str) = name_lower.strip_prefix('f')
        && let Ok(num) = num_str.parse::<u8>()
    {
        if (1..=12).contains(&num) {
            return Ok(format!("F{}", num));
        }
        return Err(KeybindError::UnknownKey {
            name: name.to_string(),
        });
    }

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(c.to_string());
    }

    Err(KeybindError::UnknownKey {
        name: name.to_string(),
    })
}

/// Chords the browser uses for text editing; overriding them would break
/// copy/paste inside the tools' inputs.
pub const RESERVED_KEYS: &[&str] = &["mod+c", "mod+v", "mod+x", "mod+z"];

/// Validate a set of keybinding overrides.
///
/// Rejects empty key lists, unparsable strings, reserved chords, and the same
/// chord claimed by two different commands.
///
/// # Examples
///
/// ```
/// use devtoolbox_config::keybind::validate_overrides;
/// use devtoolbox_config::KeybindOverrides;
///
/// let mut overrides = KeybindOverrides::default();
/// overrides.insert("global.open-palette", vec!["Mod+P".to_string()]);
/// overrides.insert("global.toggle-help", vec!["F1".to_string()]);
///
/// assert!(validate_overrides(&overrides).is_ok());
/// ```
pub fn validate_overrides(overrides: &KeybindOverrides) -> Result<(), KeybindError> {
    let mut key_to_command: HashMap<String, &str> = HashMap::new();

    for (command, keys) in overrides.iter() {
        let command = command.as_str();
        if keys.is_empty() {
            return Err(KeybindError::EmptyBindings {
                command: command.to_string(),
            });
        }

        for key_str in keys {
            let parsed = parse_key(key_str).map_err(|e| KeybindError::InvalidSyntax {
                key: format!("{} for command '{}': {}", key_str, command, e),
            })?;

            let canonical = parsed.canonical();
            if RESERVED_KEYS.contains(&canonical.as_str()) {
                return Err(KeybindError::ReservedKey {
                    key: key_str.clone(),
                });
            }

            if let Some(existing) = key_to_command.get(&canonical)
                && *existing != command
            {
                return Err(KeybindError::Conflict {
                    key: key_str.clone(),
                    command1: existing.to_string(),
                    command2: command.to_string(),
                });
            }
            key_to_command.insert(canonical, command);
        }
    }

    Ok(())
}
