//! Command registry.
//!
//! Responsibilities:
//! - Store commands by id in insertion order.
//! - Answer snapshot queries by id, by context, and for help display.
//!
//! Does NOT handle:
//! - Matching or running commands (see `dispatcher` module).
//!
//! Invariants:
//! - At most one command per id; re-registering replaces the old definition
//!   in its original position.
//! - Queries return owned snapshots, so callers may register while iterating.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::command::Command;
use crate::context::Context;
use crate::display::{CommandDisplayInfo, display_info};
use crate::platform::Platform;

/// A registry shared between the composition root and a dispatcher.
pub type SharedRegistry = Arc<RwLock<CommandRegistry>>;

#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Arc<Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the registry for sharing with a `Dispatcher`.
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    /// Insert a command, replacing any command with the same id.
    pub fn register(&mut self, command: impl Into<Arc<Command>>) {
        let command = command.into();
        if command.bindings().is_empty() {
            tracing::warn!(command = command.id(), "Registering command without key bindings");
        }
        if command.bindings().iter().any(|binding| binding.key().is_empty()) {
            tracing::warn!(command = command.id(), "Registering command with an empty key binding");
        }
        if command.contexts().is_empty() {
            tracing::warn!(command = command.id(), "Registering command without contexts");
        }

        match self.position(command.id()) {
            Some(index) => {
                tracing::warn!(command = command.id(), "Overwriting existing command");
                self.commands[index] = command;
            }
            None => self.commands.push(command),
        }
    }

    pub fn register_all<I, C>(&mut self, commands: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Arc<Command>>,
    {
        for command in commands {
            self.register(command);
        }
    }

    /// Remove a command by id. Returns whether one was removed.
    pub fn unregister(&mut self, id: &str) -> bool {
        match self.position(id) {
            Some(index) => {
                self.commands.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<Arc<Command>> {
        self.position(id).map(|index| Arc::clone(&self.commands[index]))
    }

    pub fn get_all(&self) -> Vec<Arc<Command>> {
        self.commands.clone()
    }

    /// Commands tagged with `context` or with `Global`.
    pub fn get_by_context(&self, context: Context) -> Vec<Arc<Command>> {
        self.commands
            .iter()
            .filter(|command| command.applies_to(context))
            .cloned()
            .collect()
    }

    pub fn get_display_info(&self, platform: &dyn Platform) -> Vec<CommandDisplayInfo> {
        self.commands
            .iter()
            .map(|command| display_info(command, platform))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.commands.iter().position(|command| command.id() == id)
    }
}

/// Read access that survives a panic in another holder.
pub(crate) fn read(registry: &SharedRegistry) -> RwLockReadGuard<'_, CommandRegistry> {
    registry.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write access that survives a panic in another holder.
pub fn write(registry: &SharedRegistry) -> RwLockWriteGuard<'_, CommandRegistry> {
    registry.write().unwrap_or_else(PoisonError::into_inner)
}
