//! Command definitions.
//!
//! Responsibilities:
//! - Define `Command`: id, description, bindings, category, contexts,
//!   priority, guard, and effect.
//! - Define `Effect`, the value an effect returns, and `CommandError`.
//!
//! Does NOT handle:
//! - Deciding which command runs (see `dispatcher` module).
//!
//! Invariants:
//! - A command is immutable once built; the registry shares it as `Arc<Command>`.
//! - The guard is only consulted after one of the bindings matched.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::{Context, ExecutionContext};
use crate::key::{KeyBinding, KeyPress};
use crate::platform::Platform;

/// Predicate deciding whether a matched command may run.
pub type Guard = Arc<dyn Fn(&ExecutionContext<'_>) -> bool + Send + Sync>;

/// The work a command performs.
pub type Action = Arc<dyn Fn(&ExecutionContext<'_>) -> Result<Effect, CommandError> + Send + Sync>;

/// Grouping used by help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Navigation,
    Search,
    Actions,
    View,
    Help,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Navigation,
        Self::Search,
        Self::Actions,
        Self::View,
        Self::Help,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Search => "Search",
            Self::Actions => "Actions",
            Self::View => "View",
            Self::Help => "Help",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Result of running a command's effect.
pub enum Effect {
    /// All work finished synchronously.
    Done,
    /// Work continues in the background; handed to a `Spawner`, never awaited.
    Pending(BoxFuture<'static, ()>),
}

impl Effect {
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self::Pending(Box::pin(future))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done => f.write_str("Done"),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// Failure raised by a command effect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    Failed(String),

    #[error("host does not support {capability}")]
    Unsupported { capability: &'static str },
}

fn always(_: &ExecutionContext<'_>) -> bool {
    true
}

fn no_op(_: &ExecutionContext<'_>) -> Result<Effect, CommandError> {
    Ok(Effect::Done)
}

/// A keyboard-triggered command.
#[derive(Clone)]
pub struct Command {
    id: String,
    description: String,
    bindings: Vec<KeyBinding>,
    category: Category,
    contexts: Vec<Context>,
    priority: i32,
    can_execute: Guard,
    execute: Action,
}

impl Command {
    /// A global, priority-0 action command that always may run and does nothing.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            bindings: Vec::new(),
            category: Category::Actions,
            contexts: vec![Context::Global],
            priority: 0,
            can_execute: Arc::new(always),
            execute: Arc::new(no_op),
        }
    }

    pub fn with_binding(mut self, binding: KeyBinding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Replace all bindings.
    pub fn with_bindings(mut self, bindings: impl IntoIterator<Item = KeyBinding>) -> Self {
        self.bindings = bindings.into_iter().collect();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Replace the context tags.
    pub fn with_contexts(mut self, contexts: impl IntoIterator<Item = Context>) -> Self {
        self.contexts = contexts.into_iter().collect();
        self
    }

    pub fn with_context(self, context: Context) -> Self {
        self.with_contexts([context])
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_guard<F>(mut self, guard: F) -> Self
    where
        F: Fn(&ExecutionContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.can_execute = Arc::new(guard);
        self
    }

    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&ExecutionContext<'_>) -> Result<Effect, CommandError> + Send + Sync + 'static,
    {
        self.execute = Arc::new(action);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn contexts(&self) -> &[Context] {
        &self.contexts
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Candidate under `context` when tagged with it or with `Global`.
    pub fn applies_to(&self, context: Context) -> bool {
        self.contexts
            .iter()
            .any(|tag| *tag == context || *tag == Context::Global)
    }

    /// The first binding, in declared order, that `event` satisfies.
    pub fn matching_binding(&self, event: &KeyPress, platform: &dyn Platform) -> Option<&KeyBinding> {
        self.bindings
            .iter()
            .find(|binding| binding.matches(event, platform))
    }

    pub fn can_execute(&self, ctx: &ExecutionContext<'_>) -> bool {
        (self.can_execute)(ctx)
    }

    pub fn execute(&self, ctx: &ExecutionContext<'_>) -> Result<Effect, CommandError> {
        (self.execute)(ctx)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("description", &self.description)
            .field("bindings", &self.bindings)
            .field("category", &self.category)
            .field("contexts", &self.contexts)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
