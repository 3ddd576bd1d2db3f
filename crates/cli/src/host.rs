//! Console stand-in for the browser host.
//!
//! Responsibilities:
//! - Implement `ShortcutDeps` over an in-memory app state seeded from CLI flags.
//! - Keep a log of effects so the CLI can report what a shortcut did.
//!
//! Does NOT handle:
//! - Rendering; effects are described as text.
//!
//! Invariants:
//! - `navigate` keeps the current path, selected tool, and section consistent.

use std::sync::{Mutex, MutexGuard, PoisonError};

use devtoolbox_keyboard::{AppStateSnapshot, ScrollRequest, Section, ShortcutDeps, Theme};
use futures::future::BoxFuture;

use crate::args::HostArgs;
use crate::clipboard;

/// Tools shown in the sidebar when `--tools` is not given.
pub const SAMPLE_TOOL_IDS: &[&str] = &[
    "json-formatter",
    "base64",
    "url-encoder",
    "jwt-decoder",
    "uuid-generator",
    "hash-generator",
];

#[derive(Debug)]
struct HostState {
    snapshot: AppStateSnapshot,
    path: String,
    input_focused: bool,
    effects: Vec<String>,
}

pub struct ConsoleHost {
    state: Mutex<HostState>,
    output: Option<String>,
    palette: bool,
    help: bool,
}

impl ConsoleHost {
    pub fn from_args(args: &HostArgs) -> Self {
        let tool_ids = if args.tools.is_empty() {
            SAMPLE_TOOL_IDS.iter().map(|id| id.to_string()).collect()
        } else {
            args.tools.clone()
        };
        let snapshot = AppStateSnapshot {
            theme: Theme::from(args.theme),
            sidebar_collapsed: false,
            search_query: args.search.clone(),
            selected_tool_id: selected_tool(&args.path),
            active_section: Section::from_path(&args.path),
            pinned_tool_ids: args.pinned.clone(),
            tool_ids,
        };

        Self {
            state: Mutex::new(HostState {
                snapshot,
                path: args.path.clone(),
                input_focused: args.input_focused,
                effects: Vec::new(),
            }),
            output: args.output.clone(),
            palette: args.palette,
            help: args.help_overlay,
        }
    }

    pub fn path(&self) -> String {
        self.lock().path.clone()
    }

    pub fn input_focused(&self) -> bool {
        self.lock().input_focused
    }

    /// Flip the simulated input focus and return the new value.
    pub fn toggle_input_focus(&self) -> bool {
        let mut state = self.lock();
        state.input_focused = !state.input_focused;
        state.input_focused
    }

    pub fn snapshot(&self) -> AppStateSnapshot {
        self.lock().snapshot.clone()
    }

    /// Effects recorded since the last call.
    pub fn take_effects(&self) -> Vec<String> {
        std::mem::take(&mut self.lock().effects)
    }

    fn lock(&self) -> MutexGuard<'_, HostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, effect: String) {
        tracing::info!(effect = %effect, "Host effect");
        self.lock().effects.push(effect);
    }
}

fn selected_tool(path: &str) -> Option<String> {
    path.strip_prefix("/tools/")
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

impl ShortcutDeps for ConsoleHost {
    fn navigate(&self, path: &str) {
        {
            let mut state = self.lock();
            state.path = path.to_string();
            state.snapshot.selected_tool_id = selected_tool(path);
            state.snapshot.active_section = Section::from_path(path);
        }
        self.record(format!("navigate {path}"));
    }

    fn toggle_sidebar(&self) {
        let collapsed = {
            let mut state = self.lock();
            state.snapshot.sidebar_collapsed = !state.snapshot.sidebar_collapsed;
            state.snapshot.sidebar_collapsed
        };
        self.record(format!("sidebar collapsed={collapsed}"));
    }

    fn set_sidebar_collapsed(&self, collapsed: bool) {
        self.lock().snapshot.sidebar_collapsed = collapsed;
        self.record(format!("sidebar collapsed={collapsed}"));
    }

    fn set_search_query(&self, query: &str) {
        self.lock().snapshot.search_query = query.to_string();
        self.record(format!("search query={query:?}"));
    }

    fn clear_inputs(&self) {
        self.record("clear inputs".to_string());
    }

    fn copy_to_clipboard(&self) -> BoxFuture<'static, bool> {
        self.record("copy output".to_string());
        let output = self.output.clone();
        Box::pin(async move {
            let Some(text) = output else {
                tracing::warn!("No tool output to copy");
                return false;
            };
            match tokio::task::spawn_blocking(move || clipboard::copy_to_clipboard(text)).await {
                Ok(Ok(())) => true,
                Ok(Err(error)) => {
                    tracing::warn!(error = %error, "Clipboard copy failed");
                    false
                }
                Err(error) => {
                    tracing::error!(error = %error, "Clipboard task failed");
                    false
                }
            }
        })
    }

    fn set_theme(&self, theme: Theme) {
        self.lock().snapshot.theme = theme;
        self.record(format!("theme={theme:?}").to_lowercase());
    }

    fn set_active_section(&self, section: Section) {
        self.lock().snapshot.active_section = section;
        self.record(format!("section={section}"));
    }

    fn state(&self) -> AppStateSnapshot {
        self.snapshot()
    }

    fn supports_palette(&self) -> bool {
        self.palette
    }

    fn open_palette(&self) {
        self.record("open palette".to_string());
    }

    fn supports_help(&self) -> bool {
        self.help
    }

    fn toggle_help(&self) {
        self.record("toggle help".to_string());
    }

    fn scroll(&self, request: ScrollRequest) {
        self.record(format!("scroll {request:?}").to_lowercase());
    }

    fn move_list_selection(&self, delta: i32) {
        self.record(format!("move post selection {delta:+}"));
    }
}
