//! Composition of the shortcut engine from settings.
//!
//! Responsibilities:
//! - Build the registry from the built-in catalog with user settings applied.
//! - Wire platform, telemetry, and effect spawning into a `Dispatcher`.
//! - Provide a spawner whose effects can be awaited before the process exits.

use std::sync::Arc;

use anyhow::Context as _;
use devtoolbox_config::KeyboardSettings;
use devtoolbox_keyboard::providers::all_commands;
use devtoolbox_keyboard::{
    CommandRegistry, Dispatcher, MetricsRecorder, Platform, Spawner, configure_commands,
};
use futures::future::BoxFuture;
use tokio_util::task::TaskTracker;

pub fn build_registry(settings: &KeyboardSettings) -> anyhow::Result<CommandRegistry> {
    let commands = configure_commands(all_commands(), settings)
        .context("Failed to apply keybinding settings")?;
    let mut registry = CommandRegistry::new();
    registry.register_all(commands);
    tracing::debug!(commands = registry.len(), "Registered shortcuts");
    Ok(registry)
}

pub fn build_dispatcher(
    settings: &KeyboardSettings,
    platform: Arc<dyn Platform>,
    spawner: Arc<dyn Spawner>,
) -> anyhow::Result<Dispatcher> {
    let registry = build_registry(settings)?;
    Ok(Dispatcher::new(registry.into_shared(), platform)
        .with_recorder(Arc::new(MetricsRecorder::new(settings.telemetry_enabled)))
        .with_spawner(spawner))
}

/// Spawns effects on the current runtime and lets the caller wait for them.
#[derive(Default)]
pub struct TrackedSpawner {
    tracker: TaskTracker,
}

impl TrackedSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for every effect spawned so far.
    pub async fn drain(&self) {
        self.tracker.close();
        self.tracker.wait().await;
    }
}

impl Spawner for TrackedSpawner {
    fn spawn(&self, command_id: &str, effect: BoxFuture<'static, ()>) {
        let command_id = command_id.to_string();
        self.tracker.spawn(async move {
            effect.await;
            tracing::debug!(command = %command_id, "Command effect completed");
        });
    }
}
