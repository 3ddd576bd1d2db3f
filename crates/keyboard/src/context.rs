//! Application contexts and the per-event execution context.
//!
//! Responsibilities:
//! - Define `Context` tags that scope commands and `Section`, the active area
//!   of the application.
//! - Bundle one key press with its ambient state into `ExecutionContext`.
//!
//! Invariants:
//! - `Context::Global` commands are candidates in every section.
//! - Any section string other than `"blog"` means the tools section.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::deps::ShortcutDeps;
use crate::key::KeyPress;

/// Scope tag carried by each command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    Global,
    Tools,
    Blog,
}

impl Context {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Tools => "tools",
            Self::Blog => "blog",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Section> for Context {
    fn from(section: Section) -> Self {
        match section {
            Section::Tools => Self::Tools,
            Section::Blog => Self::Blog,
        }
    }
}

/// The area of the application the user is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Tools,
    Blog,
}

impl Section {
    /// `/blog` and everything below it is the blog; every other path is tools.
    pub fn from_path(path: &str) -> Self {
        if path == "/blog" || path.starts_with("/blog/") {
            Self::Blog
        } else {
            Self::Tools
        }
    }

    /// Parse a host-provided section name; unknown names fall back to tools.
    pub fn from_name(name: &str) -> Self {
        if name == "blog" { Self::Blog } else { Self::Tools }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tools => "tools",
            Self::Blog => "blog",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a guard or effect may look at for one key press.
pub struct ExecutionContext<'a> {
    pub event: &'a KeyPress,
    pub is_input_focused: bool,
    pub current_path: &'a str,
    pub active_section: Section,
    pub deps: &'a dyn ShortcutDeps,
}

impl<'a> ExecutionContext<'a> {
    /// A context at `/` in the tools section with no input focused.
    pub fn new(event: &'a KeyPress, deps: &'a dyn ShortcutDeps) -> Self {
        Self {
            event,
            is_input_focused: false,
            current_path: "/",
            active_section: Section::Tools,
            deps,
        }
    }

    pub fn with_input_focused(mut self, focused: bool) -> Self {
        self.is_input_focused = focused;
        self
    }

    /// Set the path and derive the active section from it.
    pub fn with_path(mut self, path: &'a str) -> Self {
        self.current_path = path;
        self.active_section = Section::from_path(path);
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.active_section = section;
        self
    }

    /// The context used to pick candidate commands.
    pub fn current_context(&self) -> Context {
        Context::from(self.active_section)
    }
}

impl fmt::Debug for ExecutionContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("event", self.event)
            .field("is_input_focused", &self.is_input_focused)
            .field("current_path", &self.current_path)
            .field("active_section", &self.active_section)
            .finish_non_exhaustive()
    }
}
