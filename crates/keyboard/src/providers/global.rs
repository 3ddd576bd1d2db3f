//! Shortcuts available in every section.

use crate::command::{Category, Command, CommandError, Effect};
use crate::context::{Context, ExecutionContext, Section};
use crate::key::KeyBinding;

use super::not_typing;

fn global(id: &str, description: &str) -> Command {
    Command::new(id, description).with_context(Context::Global)
}

fn mod_key(key: &str) -> KeyBinding {
    KeyBinding::new(key).with_mod().case_insensitive()
}

fn mod_shift_key(key: &str) -> KeyBinding {
    mod_key(key).with_shift()
}

pub fn global_commands() -> Vec<Command> {
    vec![
        // High priority, no typing guard: these work inside inputs.
        global("global.open-palette", "Open command palette")
            .with_binding(mod_key("k"))
            .with_category(Category::Navigation)
            .with_priority(100)
            .with_guard(|ctx| ctx.deps.supports_palette())
            .with_action(|ctx| {
                ctx.deps.open_palette();
                Ok(Effect::Done)
            }),
        global("global.copy-output", "Copy tool output")
            .with_binding(mod_shift_key("c"))
            .with_category(Category::Actions)
            .with_priority(100)
            .with_action(|ctx| {
                let copy = ctx.deps.copy_to_clipboard();
                Ok(Effect::pending(async move {
                    if copy.await {
                        tracing::debug!("Copied tool output to clipboard");
                    } else {
                        tracing::warn!("Copying tool output to clipboard failed");
                    }
                }))
            }),
        global("global.toggle-sidebar", "Toggle sidebar")
            .with_binding(mod_key("b"))
            .with_category(Category::View)
            .with_priority(90)
            .with_action(|ctx| {
                ctx.deps.toggle_sidebar();
                Ok(Effect::Done)
            }),
        global("global.toggle-theme", "Toggle light/dark theme")
            .with_binding(mod_shift_key("l"))
            .with_category(Category::View)
            .with_priority(80)
            .with_action(|ctx| {
                let theme = ctx.deps.state().theme.toggled();
                ctx.deps.set_theme(theme);
                Ok(Effect::Done)
            }),
        global("global.clear-inputs", "Clear tool input and output")
            .with_binding(mod_shift_key("x"))
            .with_category(Category::Actions)
            .with_priority(70)
            .with_action(|ctx| {
                ctx.deps.clear_inputs();
                Ok(Effect::Done)
            }),
        // Two Escape meanings, split by focus.
        global("global.clear-search", "Clear search")
            .with_binding(KeyBinding::new("Escape"))
            .with_category(Category::Search)
            .with_priority(55)
            .with_guard(|ctx| not_typing(ctx) && !ctx.deps.state().search_query.is_empty())
            .with_action(|ctx| {
                ctx.deps.set_search_query("");
                Ok(Effect::Done)
            }),
        global("global.escape-input", "Clear focused input")
            .with_binding(KeyBinding::new("Escape"))
            .with_category(Category::Actions)
            .with_priority(50)
            .with_guard(|ctx| ctx.is_input_focused)
            .with_action(|ctx| {
                ctx.deps.clear_inputs();
                Ok(Effect::Done)
            }),
        global("global.toggle-help", "Show keyboard shortcuts")
            .with_binding(KeyBinding::new("?").with_shift())
            .with_category(Category::Help)
            .with_priority(40)
            .with_guard(|ctx| not_typing(ctx) && ctx.deps.supports_help())
            .with_action(|ctx| {
                ctx.deps.toggle_help();
                Ok(Effect::Done)
            }),
        global("global.go-blog", "Go to blog")
            .with_binding(mod_shift_key("b"))
            .with_category(Category::Navigation)
            .with_priority(30)
            .with_guard(|ctx| ctx.active_section != Section::Blog)
            .with_action(|ctx| switch_section(ctx, "/blog", Section::Blog)),
        global("global.go-tools", "Go to tools")
            .with_binding(mod_shift_key("t"))
            .with_category(Category::Navigation)
            .with_priority(30)
            .with_guard(|ctx| ctx.active_section != Section::Tools)
            .with_action(|ctx| switch_section(ctx, "/", Section::Tools)),
    ]
}

fn switch_section(
    ctx: &ExecutionContext<'_>,
    path: &str,
    section: Section,
) -> Result<Effect, CommandError> {
    ctx.deps.navigate(path);
    ctx.deps.set_active_section(section);
    Ok(Effect::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps::{AppStateSnapshot, Theme};
    use crate::key::{KeyPress, Modifiers};
    use crate::platform::StaticPlatform;
    use crate::testing::{DepsCall, RecordingDeps};

    fn find(id: &str) -> Command {
        global_commands()
            .into_iter()
            .find(|c| c.id() == id)
            .unwrap()
    }

    #[test]
    fn test_palette_requires_host_support() {
        let command = find("global.open-palette");
        let event = KeyPress::new("k").with_modifiers(Modifiers::META);
        assert!(command.matching_binding(&event, &StaticPlatform::APPLE).is_some());

        let plain = RecordingDeps::default();
        assert!(!command.can_execute(&ExecutionContext::new(&event, &plain)));
        let palette = RecordingDeps::default().with_palette();
        assert!(command.can_execute(&ExecutionContext::new(&event, &palette)));
    }

    #[test]
    fn test_toggle_theme_flips_current_theme() {
        let deps = RecordingDeps::new(AppStateSnapshot {
            theme: Theme::Dark,
            ..AppStateSnapshot::default()
        });
        let event = KeyPress::new("L");
        find("global.toggle-theme")
            .execute(&ExecutionContext::new(&event, &deps))
            .unwrap();
        assert_eq!(deps.calls(), vec![DepsCall::SetTheme(Theme::Light)]);
    }

    #[test]
    fn test_copy_output_is_pending() {
        let deps = RecordingDeps::default();
        let event = KeyPress::new("C");
        let effect = find("global.copy-output")
            .execute(&ExecutionContext::new(&event, &deps))
            .unwrap();
        assert!(effect.is_pending());
        assert_eq!(deps.calls(), vec![DepsCall::CopyToClipboard]);
    }

    #[test]
    fn test_go_blog_only_outside_blog() {
        let command = find("global.go-blog");
        let deps = RecordingDeps::default();
        let event = KeyPress::new("B");

        let in_blog = ExecutionContext::new(&event, &deps).with_path("/blog");
        assert!(!command.can_execute(&in_blog));

        let in_tools = ExecutionContext::new(&event, &deps).with_path("/tools/json");
        assert!(command.can_execute(&in_tools));
        command.execute(&in_tools).unwrap();
        assert_eq!(
            deps.calls(),
            vec![
                DepsCall::Navigate("/blog".into()),
                DepsCall::SetActiveSection(Section::Blog)
            ]
        );
    }

    #[test]
    fn test_clear_search_needs_query_and_no_focus() {
        let command = find("global.clear-search");
        let event = KeyPress::new("Escape");

        let empty = RecordingDeps::default();
        assert!(!command.can_execute(&ExecutionContext::new(&event, &empty)));

        let searching = RecordingDeps::new(AppStateSnapshot {
            search_query: "json".into(),
            ..AppStateSnapshot::default()
        });
        assert!(command.can_execute(&ExecutionContext::new(&event, &searching)));
        assert!(!command.can_execute(
            &ExecutionContext::new(&event, &searching).with_input_focused(true)
        ));
    }
}
