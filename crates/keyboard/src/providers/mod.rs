//! Built-in command sets for each application context.
//!
//! Responsibilities:
//! - Declare the global, tools, and blog shortcut catalogs.
//!
//! Does NOT handle:
//! - Registration or settings overrides (see `registry` and `overrides`).
//!
//! Invariants:
//! - Command ids are unique across all catalogs.
//! - Section commands never fire while a text input is focused.

mod blog;
mod global;
mod tools;

pub use blog::{blog_commands, is_post_page};
pub use global::global_commands;
pub use tools::{tool_path, tools_commands};

use crate::command::Command;
use crate::context::ExecutionContext;

/// Every built-in command, global first.
pub fn all_commands() -> Vec<Command> {
    let mut commands = global_commands();
    commands.extend(tools_commands());
    commands.extend(blog_commands());
    commands
}

fn not_typing(ctx: &ExecutionContext<'_>) -> bool {
    !ctx.is_input_focused
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::context::Context;

    #[test]
    fn test_ids_are_unique() {
        let commands = all_commands();
        let ids: HashSet<&str> = commands.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), commands.len());
    }

    #[test]
    fn test_every_command_has_bindings_and_context() {
        for command in all_commands() {
            assert!(!command.bindings().is_empty(), "{} has no bindings", command.id());
            assert!(!command.contexts().is_empty(), "{} has no contexts", command.id());
        }
    }

    #[test]
    fn test_ids_are_prefixed_by_context() {
        for command in all_commands() {
            let prefix = command.contexts()[0].as_str();
            assert!(
                command.id().starts_with(&format!("{prefix}.")),
                "{} should start with {prefix}.",
                command.id()
            );
        }
        assert!(global_commands().iter().all(|c| c.contexts() == [Context::Global]));
    }
}
