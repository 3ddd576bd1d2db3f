//! The host capabilities that shortcut effects act through.
//!
//! Responsibilities:
//! - Define `ShortcutDeps`, the bag of callbacks built-in commands invoke.
//! - Define the read-only `AppStateSnapshot` guards inspect.
//!
//! Does NOT handle:
//! - Persisting preferences or rendering; hosts implement those behind the trait.
//!
//! Invariants:
//! - Optional capabilities default to "unsupported" and no-op.

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::context::Section;

/// Colour scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Dark flips to light; light and system flip to dark.
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light | Self::System => Self::Dark,
        }
    }
}

/// How a blog post should scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollRequest {
    Down,
    Up,
    Top,
    Bottom,
}

/// Host state visible to guards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppStateSnapshot {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    pub search_query: String,
    pub selected_tool_id: Option<String>,
    pub active_section: Section,
    pub pinned_tool_ids: Vec<String>,
    /// Tools in sidebar order.
    pub tool_ids: Vec<String>,
}

/// Callbacks into the host application.
pub trait ShortcutDeps {
    fn navigate(&self, path: &str);
    fn toggle_sidebar(&self);
    fn set_sidebar_collapsed(&self, collapsed: bool);
    fn set_search_query(&self, query: &str);
    fn clear_inputs(&self);
    /// Copy the active tool's output. Resolves to whether the copy succeeded.
    fn copy_to_clipboard(&self) -> BoxFuture<'static, bool>;
    fn set_theme(&self, theme: Theme);
    fn set_active_section(&self, section: Section);
    fn state(&self) -> AppStateSnapshot;

    fn supports_palette(&self) -> bool {
        false
    }

    fn open_palette(&self) {}

    fn supports_help(&self) -> bool {
        false
    }

    fn toggle_help(&self) {}

    fn scroll(&self, _request: ScrollRequest) {}

    fn move_list_selection(&self, _delta: i32) {}
}
