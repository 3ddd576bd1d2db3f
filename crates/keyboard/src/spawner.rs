//! Background execution for pending command effects.
//!
//! Responsibilities:
//! - Run `Effect::Pending` futures detached from the dispatching call.
//!
//! Does NOT handle:
//! - Cancellation, timeouts, or ordering between effects of separate keystrokes.
//!
//! Invariants:
//! - `spawn` returns immediately; the dispatcher never awaits an effect.

use futures::future::BoxFuture;
use tokio::runtime::Handle;

/// Runs pending effects in the background.
pub trait Spawner: Send + Sync {
    fn spawn(&self, command_id: &str, effect: BoxFuture<'static, ()>);
}

/// Spawns effects as tasks on a Tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioSpawner {
    handle: Handle,
}

impl TokioSpawner {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// A spawner for the runtime the caller is running on, if any.
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl Spawner for TokioSpawner {
    fn spawn(&self, command_id: &str, effect: BoxFuture<'static, ()>) {
        let command_id = command_id.to_string();
        self.handle.spawn(async move {
            effect.await;
            tracing::debug!(command = %command_id, "Command effect completed");
        });
    }
}

const EFFECT_THREAD_NAME: &str = "shortcut-effect";

/// Drives each effect to completion on its own thread, for hosts without a runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSpawner;

impl Spawner for DetachedSpawner {
    fn spawn(&self, command_id: &str, effect: BoxFuture<'static, ()>) {
        let owned_id = command_id.to_string();
        let spawned = std::thread::Builder::new()
            .name(EFFECT_THREAD_NAME.to_string())
            .spawn(move || {
                futures::executor::block_on(effect);
                tracing::debug!(command = %owned_id, "Command effect completed");
            });
        if let Err(error) = spawned {
            tracing::error!(command = command_id, error = %error, "Failed to start effect thread");
        }
    }
}
