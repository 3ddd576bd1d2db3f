//! Shortcut usage telemetry.
//!
//! Responsibilities:
//! - Record which command ran and how it was triggered.
//! - Emit a low-cardinality counter through the `metrics` facade.
//!
//! Non-goals:
//! - Exporting metrics (the host installs a recorder, e.g. Prometheus).
//! - Recording misses; only commands that fired are counted.

/// Counter incremented once per command invocation.
pub const METRIC_SHORTCUT_INVOCATIONS: &str = "devtoolbox_shortcut_invocations_total";

/// How a command was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionSource {
    Keyboard,
}

impl InteractionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyboard => "keyboard",
        }
    }
}

/// Sink for command invocations.
pub trait InteractionRecorder: Send + Sync {
    fn record(&self, command_id: &str, source: InteractionSource);
}

/// Discards every interaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecorder;

impl InteractionRecorder for NoopRecorder {
    fn record(&self, _command_id: &str, _source: InteractionSource) {}
}

/// Forwards interactions to the global `metrics` recorder.
#[derive(Debug, Clone, Copy)]
pub struct MetricsRecorder {
    enabled: bool,
}

impl MetricsRecorder {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl InteractionRecorder for MetricsRecorder {
    fn record(&self, command_id: &str, source: InteractionSource) {
        if !self.enabled {
            return;
        }
        // Label set is bounded by the command catalog.
        metrics::counter!(
            METRIC_SHORTCUT_INVOCATIONS,
            "command" => command_id.to_string(),
            "source" => source.as_str(),
        )
        .increment(1);
    }
}
