//! Key event dispatch.
//!
//! Responsibilities:
//! - Pick the command a key press triggers under the current context.
//! - Run it, hand pending effects to the spawner, and record telemetry.
//!
//! Does NOT handle:
//! - Listening for key events (the host calls `handle_key_event`).
//! - Awaiting effects.
//!
//! Invariants:
//! - Candidates are tried by descending priority; equal priorities keep
//!   registry order.
//! - At most one command runs per key press.
//! - Nothing is prevented or recorded when no command runs.
//! - The registry lock is released before any guard or effect runs.
//! - Guards, actions, and effect spawning never unwind out of `dispatch`.

use std::any::Any;
use std::cmp::Reverse;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::command::{Command, Effect};
use crate::context::{Context, ExecutionContext};
use crate::platform::Platform;
use crate::registry::{self, SharedRegistry};
use crate::spawner::{DetachedSpawner, Spawner};
use crate::telemetry::{InteractionRecorder, InteractionSource, NoopRecorder};

/// What happened to one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A command ran.
    Handled { command_id: String },
    /// A command was chosen but its effect failed; the press is still consumed.
    Failed { command_id: String },
    /// No command matched.
    Unhandled,
}

impl DispatchOutcome {
    /// Whether the host should treat the press as consumed.
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Unhandled)
    }

    pub fn command_id(&self) -> Option<&str> {
        match self {
            Self::Handled { command_id } | Self::Failed { command_id } => Some(command_id),
            Self::Unhandled => None,
        }
    }
}

pub struct Dispatcher {
    registry: SharedRegistry,
    platform: Arc<dyn Platform>,
    recorder: Arc<dyn InteractionRecorder>,
    spawner: Arc<dyn Spawner>,
}

impl Dispatcher {
    /// A dispatcher that records nothing and runs effects on detached threads.
    pub fn new(registry: SharedRegistry, platform: Arc<dyn Platform>) -> Self {
        Self {
            registry,
            platform,
            recorder: Arc::new(NoopRecorder),
            spawner: Arc::new(DetachedSpawner),
        }
    }

    pub fn with_recorder(mut self, recorder: Arc<dyn InteractionRecorder>) -> Self {
        self.recorder = recorder;
        self
    }

    pub fn with_spawner(mut self, spawner: Arc<dyn Spawner>) -> Self {
        self.spawner = spawner;
        self
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn platform(&self) -> &dyn Platform {
        self.platform.as_ref()
    }

    /// Commands considered under `context`, in the order they are tried.
    pub fn candidates(&self, context: Context) -> Vec<Arc<Command>> {
        let mut candidates = registry::read(&self.registry).get_by_context(context);
        candidates.sort_by_key(|command| Reverse(command.priority()));
        candidates
    }

    /// Dispatch a key press. Returns true when a command consumed it.
    pub fn handle_key_event(&self, ctx: &ExecutionContext<'_>) -> bool {
        self.dispatch(ctx).is_handled()
    }

    pub fn dispatch(&self, ctx: &ExecutionContext<'_>) -> DispatchOutcome {
        let context = ctx.current_context();

        for command in self.candidates(context) {
            if command
                .matching_binding(ctx.event, self.platform.as_ref())
                .is_none()
            {
                continue;
            }
            if !self.guard_allows(&command, ctx) {
                continue;
            }
            return self.run(&command, context, ctx);
        }

        tracing::trace!(key = ctx.event.key(), context = %context, "No command matched");
        DispatchOutcome::Unhandled
    }

    fn guard_allows(&self, command: &Command, ctx: &ExecutionContext<'_>) -> bool {
        match catch_unwind(AssertUnwindSafe(|| command.can_execute(ctx))) {
            Ok(allowed) => allowed,
            Err(payload) => {
                tracing::error!(
                    command = command.id(),
                    panic = panic_message(payload.as_ref()),
                    "Command guard panicked; skipping"
                );
                false
            }
        }
    }

    fn run(
        &self,
        command: &Command,
        context: Context,
        ctx: &ExecutionContext<'_>,
    ) -> DispatchOutcome {
        ctx.event.prevent_default();

        let failure = match catch_unwind(AssertUnwindSafe(|| command.execute(ctx))) {
            Ok(Ok(Effect::Done)) => None,
            Ok(Ok(Effect::Pending(future))) => {
                match catch_unwind(AssertUnwindSafe(|| self.spawner.spawn(command.id(), future))) {
                    Ok(()) => None,
                    Err(payload) => Some(format!(
                        "effect spawn panicked: {}",
                        panic_message(payload.as_ref())
                    )),
                }
            }
            Ok(Err(error)) => Some(error.to_string()),
            Err(payload) => Some(format!("panicked: {}", panic_message(payload.as_ref()))),
        };

        if let Some(error) = failure {
            tracing::error!(command = command.id(), error = %error, "Command failed");
            return DispatchOutcome::Failed {
                command_id: command.id().to_string(),
            };
        }

        self.recorder.record(command.id(), InteractionSource::Keyboard);
        tracing::debug!(
            command = command.id(),
            context = %context,
            key = ctx.event.key(),
            "Dispatched command"
        );
        DispatchOutcome::Handled {
            command_id: command.id().to_string(),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}
