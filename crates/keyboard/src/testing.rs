//! Test doubles for hosts and downstream crates.
//!
//! Available under `cfg(test)` and the `test-utils` feature.

use std::sync::{Mutex, MutexGuard, PoisonError};

use futures::future::{self, BoxFuture};

use crate::context::Section;
use crate::deps::{AppStateSnapshot, ScrollRequest, ShortcutDeps, Theme};
use crate::spawner::Spawner;
use crate::telemetry::{InteractionRecorder, InteractionSource};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One call made through `ShortcutDeps`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepsCall {
    Navigate(String),
    ToggleSidebar,
    SetSidebarCollapsed(bool),
    SetSearchQuery(String),
    ClearInputs,
    CopyToClipboard,
    SetTheme(Theme),
    SetActiveSection(Section),
    OpenPalette,
    ToggleHelp,
    Scroll(ScrollRequest),
    MoveListSelection(i32),
}

/// `ShortcutDeps` that records every call and keeps a mutable state snapshot.
#[derive(Debug, Default)]
pub struct RecordingDeps {
    state: Mutex<AppStateSnapshot>,
    calls: Mutex<Vec<DepsCall>>,
    palette: bool,
    help: bool,
    clipboard_fails: bool,
}

impl RecordingDeps {
    pub fn new(state: AppStateSnapshot) -> Self {
        Self {
            state: Mutex::new(state),
            ..Self::default()
        }
    }

    pub fn with_palette(mut self) -> Self {
        self.palette = true;
        self
    }

    pub fn with_help(mut self) -> Self {
        self.help = true;
        self
    }

    pub fn with_failing_clipboard(mut self) -> Self {
        self.clipboard_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<DepsCall> {
        lock(&self.calls).clone()
    }

    pub fn snapshot(&self) -> AppStateSnapshot {
        lock(&self.state).clone()
    }

    fn push(&self, call: DepsCall) {
        lock(&self.calls).push(call);
    }
}

impl ShortcutDeps for RecordingDeps {
    fn navigate(&self, path: &str) {
        self.push(DepsCall::Navigate(path.to_string()));
        let mut state = lock(&self.state);
        state.selected_tool_id = path.strip_prefix("/tools/").map(str::to_string);
    }

    fn toggle_sidebar(&self) {
        self.push(DepsCall::ToggleSidebar);
        let mut state = lock(&self.state);
        state.sidebar_collapsed = !state.sidebar_collapsed;
    }

    fn set_sidebar_collapsed(&self, collapsed: bool) {
        self.push(DepsCall::SetSidebarCollapsed(collapsed));
        lock(&self.state).sidebar_collapsed = collapsed;
    }

    fn set_search_query(&self, query: &str) {
        self.push(DepsCall::SetSearchQuery(query.to_string()));
        lock(&self.state).search_query = query.to_string();
    }

    fn clear_inputs(&self) {
        self.push(DepsCall::ClearInputs);
    }

    fn copy_to_clipboard(&self) -> BoxFuture<'static, bool> {
        self.push(DepsCall::CopyToClipboard);
        Box::pin(future::ready(!self.clipboard_fails))
    }

    fn set_theme(&self, theme: Theme) {
        self.push(DepsCall::SetTheme(theme));
        lock(&self.state).theme = theme;
    }

    fn set_active_section(&self, section: Section) {
        self.push(DepsCall::SetActiveSection(section));
        lock(&self.state).active_section = section;
    }

    fn state(&self) -> AppStateSnapshot {
        self.snapshot()
    }

    fn supports_palette(&self) -> bool {
        self.palette
    }

    fn open_palette(&self) {
        self.push(DepsCall::OpenPalette);
    }

    fn supports_help(&self) -> bool {
        self.help
    }

    fn toggle_help(&self) {
        self.push(DepsCall::ToggleHelp);
    }

    fn scroll(&self, request: ScrollRequest) {
        self.push(DepsCall::Scroll(request));
    }

    fn move_list_selection(&self, delta: i32) {
        self.push(DepsCall::MoveListSelection(delta));
    }
}

/// Spawner that holds effects until the test runs them.
#[derive(Default)]
pub struct CollectingSpawner {
    effects: Mutex<Vec<(String, BoxFuture<'static, ()>)>>,
}

impl CollectingSpawner {
    pub fn command_ids(&self) -> Vec<String> {
        lock(&self.effects).iter().map(|(id, _)| id.clone()).collect()
    }

    /// Drive every collected effect to completion. Returns how many ran.
    pub fn run_all(&self) -> usize {
        let effects = std::mem::take(&mut *lock(&self.effects));
        let count = effects.len();
        for (_, effect) in effects {
            futures::executor::block_on(effect);
        }
        count
    }
}

impl Spawner for CollectingSpawner {
    fn spawn(&self, command_id: &str, effect: BoxFuture<'static, ()>) {
        lock(&self.effects).push((command_id.to_string(), effect));
    }
}

/// Recorder that keeps every interaction in memory.
#[derive(Debug, Default)]
pub struct RecordingRecorder {
    events: Mutex<Vec<(String, InteractionSource)>>,
}

impl RecordingRecorder {
    pub fn events(&self) -> Vec<(String, InteractionSource)> {
        lock(&self.events).clone()
    }

    pub fn command_ids(&self) -> Vec<String> {
        lock(&self.events).iter().map(|(id, _)| id.clone()).collect()
    }
}

impl InteractionRecorder for RecordingRecorder {
    fn record(&self, command_id: &str, source: InteractionSource) {
        lock(&self.events).push((command_id.to_string(), source));
    }
}
