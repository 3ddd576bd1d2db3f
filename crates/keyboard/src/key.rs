//! Key events, key bindings, and the matcher between them.
//!
//! Responsibilities:
//! - Model an observed key press (`KeyPress`) with its "default prevented" flag.
//! - Model one accepted chord (`KeyBinding`), including the logical "Mod" key.
//! - Decide whether a press satisfies a binding on a given platform.
//!
//! Does NOT handle:
//! - Choosing between commands (see `dispatcher` module).
//! - Rendering bindings for help output (see `display` module).
//!
//! Invariants:
//! - Ctrl and Meta on a binding both mean "Mod"; the event must carry the
//!   platform's mod key exactly when the binding asks for it, and never the
//!   other one of the pair.
//! - Shift and Alt compare by exact equality.

use std::cell::Cell;

use bitflags::bitflags;
use devtoolbox_config::{KeybindError, ParsedKey, parse_key};

use crate::platform::Platform;

bitflags! {
    /// Modifier keys held during a key press, or required by a binding.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const CTRL = 1;
        const META = 1 << 1;
        const SHIFT = 1 << 2;
        const ALT = 1 << 3;
    }
}

impl Modifiers {
    /// Ctrl or Meta, the two spellings of the logical mod key.
    pub const MOD_PAIR: Self = Self::CTRL.union(Self::META);
}

/// A key press observed by the host, named with browser key identifiers.
#[derive(Debug)]
pub struct KeyPress {
    key: String,
    modifiers: Modifiers,
    default_prevented: Cell<bool>,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::empty(),
            default_prevented: Cell::new(false),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    pub fn meta(&self) -> bool {
        self.modifiers.contains(Modifiers::META)
    }

    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    pub fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Suppress the host's default handling of this press.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

/// One chord that triggers a command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    key: String,
    modifiers: Modifiers,
    case_sensitive: bool,
}

impl KeyBinding {
    /// A binding for `key` with no modifiers, compared case-sensitively.
    /// An empty key never matches.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::empty(),
            case_sensitive: true,
        }
    }

    /// Require the platform mod key (Command on Apple, Control elsewhere).
    pub fn with_mod(mut self) -> Self {
        self.modifiers.insert(Modifiers::CTRL);
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.modifiers.insert(Modifiers::SHIFT);
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.modifiers.insert(Modifiers::ALT);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    /// Parse a configuration string such as `"Mod+Shift+K"`.
    pub fn parse(text: &str) -> Result<Self, KeybindError> {
        parse_key(text).map(|parsed| Self::from(&parsed))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether this binding asks for the logical mod key.
    pub fn requests_mod(&self) -> bool {
        self.modifiers.intersects(Modifiers::MOD_PAIR)
    }

    pub fn matches(&self, event: &KeyPress, platform: &dyn Platform) -> bool {
        matches(event, self, platform)
    }
}

impl From<&ParsedKey> for KeyBinding {
    /// Single letters from configuration match either case; Shift is what
    /// distinguishes `G` from `g`, so an uppercase letter implies Shift.
    fn from(parsed: &ParsedKey) -> Self {
        let flags = parsed.modifiers;
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::CTRL, flags.ctrl);
        modifiers.set(Modifiers::META, flags.meta);
        modifiers.set(Modifiers::SHIFT, flags.shift);
        modifiers.set(Modifiers::ALT, flags.alt);

        let mut chars = parsed.key.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_alphabetic() => Some(c),
            _ => None,
        };
        if letter.is_some_and(char::is_uppercase) {
            modifiers.insert(Modifiers::SHIFT);
        }
        let single_letter = letter.is_some();

        Self {
            key: parsed.key.clone(),
            modifiers,
            case_sensitive: !single_letter,
        }
    }
}

/// Decide whether `event` satisfies `binding` on `platform`.
pub fn matches(event: &KeyPress, binding: &KeyBinding, platform: &dyn Platform) -> bool {
    let (mod_key, other_key) = if platform.is_apple_like() {
        (Modifiers::META, Modifiers::CTRL)
    } else {
        (Modifiers::CTRL, Modifiers::META)
    };

    let held = event.modifiers();
    if held.contains(mod_key) != binding.requests_mod() || held.contains(other_key) {
        return false;
    }

    for modifier in [Modifiers::SHIFT, Modifiers::ALT] {
        if held.contains(modifier) != binding.modifiers.contains(modifier) {
            return false;
        }
    }

    if binding.key.is_empty() {
        return false;
    }

    if binding.case_sensitive {
        event.key() == binding.key
    } else {
        event.key().to_lowercase() == binding.key.to_lowercase()
    }
}
