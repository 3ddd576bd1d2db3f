//! Shortcuts for the tools section: moving between tools and pinned tools.

use crate::command::{Category, Command, CommandError, Effect};
use crate::context::{Context, ExecutionContext};
use crate::key::KeyBinding;

use super::not_typing;

const PINNED_SLOTS: usize = 9;

/// Route of a tool page.
pub fn tool_path(tool_id: &str) -> String {
    format!("/tools/{tool_id}")
}

fn tools(id: &str, description: &str) -> Command {
    Command::new(id, description).with_context(Context::Tools)
}

pub fn tools_commands() -> Vec<Command> {
    let mut commands = vec![
        tools("tools.next-tool", "Next tool")
            .with_bindings([KeyBinding::new("j").case_insensitive(), KeyBinding::new("ArrowDown")])
            .with_category(Category::Navigation)
            .with_priority(10)
            .with_guard(|ctx| not_typing(ctx) && !ctx.deps.state().tool_ids.is_empty())
            .with_action(|ctx| step_tool(ctx, 1)),
        tools("tools.previous-tool", "Previous tool")
            .with_bindings([KeyBinding::new("k").case_insensitive(), KeyBinding::new("ArrowUp")])
            .with_category(Category::Navigation)
            .with_priority(10)
            .with_guard(|ctx| not_typing(ctx) && !ctx.deps.state().tool_ids.is_empty())
            .with_action(|ctx| step_tool(ctx, -1)),
        tools("tools.focus-search", "Search tools")
            .with_binding(KeyBinding::new("/"))
            .with_category(Category::Search)
            .with_priority(20)
            .with_guard(not_typing)
            .with_action(|ctx| {
                ctx.deps.set_sidebar_collapsed(false);
                if ctx.deps.supports_palette() {
                    ctx.deps.open_palette();
                }
                Ok(Effect::Done)
            }),
        tools("tools.back-to-list", "Back to tool list")
            .with_binding(KeyBinding::new("Escape"))
            .with_category(Category::Navigation)
            .with_priority(10)
            .with_guard(|ctx| not_typing(ctx) && ctx.deps.state().selected_tool_id.is_some())
            .with_action(|ctx| {
                ctx.deps.navigate("/");
                Ok(Effect::Done)
            }),
    ];

    for slot in 1..=PINNED_SLOTS {
        commands.push(
            tools(
                &format!("tools.open-pinned-{slot}"),
                &format!("Open pinned tool {slot}"),
            )
            .with_binding(KeyBinding::new(slot.to_string()))
            .with_category(Category::Navigation)
            .with_priority(10)
            .with_guard(move |ctx| not_typing(ctx) && ctx.deps.state().pinned_tool_ids.len() >= slot)
            .with_action(move |ctx| open_pinned(ctx, slot)),
        );
    }

    commands
}

fn step_tool(ctx: &ExecutionContext<'_>, delta: isize) -> Result<Effect, CommandError> {
    let state = ctx.deps.state();
    let next = neighbour(&state.tool_ids, state.selected_tool_id.as_deref(), delta)
        .ok_or_else(|| CommandError::Failed("no tools to navigate".into()))?;
    ctx.deps.navigate(&tool_path(next));
    Ok(Effect::Done)
}

fn open_pinned(ctx: &ExecutionContext<'_>, slot: usize) -> Result<Effect, CommandError> {
    let state = ctx.deps.state();
    let tool_id = state
        .pinned_tool_ids
        .get(slot - 1)
        .ok_or_else(|| CommandError::Failed(format!("no pinned tool in slot {slot}")))?;
    ctx.deps.navigate(&tool_path(tool_id));
    Ok(Effect::Done)
}

/// The tool `delta` steps from `current`, wrapping at both ends. With no
/// current tool, forward starts at the first and backward at the last.
fn neighbour<'a>(ids: &'a [String], current: Option<&str>, delta: isize) -> Option<&'a str> {
    if ids.is_empty() {
        return None;
    }
    let len = ids.len() as isize;
    let index = match current.and_then(|id| ids.iter().position(|candidate| candidate == id)) {
        Some(position) => (position as isize + delta).rem_euclid(len),
        None if delta >= 0 => 0,
        None => len - 1,
    };
    ids.get(index as usize).map(String::as_str)
}
