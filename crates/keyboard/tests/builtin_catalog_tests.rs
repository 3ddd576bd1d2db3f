//! The built-in catalogs registered together and driven through a dispatcher.

use std::sync::Arc;

use devtoolbox_config::{KeybindOverrides, KeyboardSettings};
use devtoolbox_keyboard::providers::all_commands;
use devtoolbox_keyboard::testing::{CollectingSpawner, DepsCall, RecordingDeps, RecordingRecorder};
use devtoolbox_keyboard::{
    AppStateSnapshot, CommandRegistry, Dispatcher, ExecutionContext, KeyPress, Modifiers,
    ScrollRequest, Section, StaticPlatform, Theme, configure_commands,
};

struct Setup {
    dispatcher: Dispatcher,
    spawner: Arc<CollectingSpawner>,
    recorder: Arc<RecordingRecorder>,
}

fn setup(settings: &KeyboardSettings) -> Setup {
    let mut registry = CommandRegistry::new();
    registry.register_all(configure_commands(all_commands(), settings).unwrap());
    let spawner = Arc::new(CollectingSpawner::default());
    let recorder = Arc::new(RecordingRecorder::default());
    let dispatcher = Dispatcher::new(registry.into_shared(), Arc::new(StaticPlatform::OTHER))
        .with_spawner(spawner.clone())
        .with_recorder(recorder.clone());
    Setup {
        dispatcher,
        spawner,
        recorder,
    }
}

fn tools_state() -> AppStateSnapshot {
    AppStateSnapshot {
        tool_ids: vec!["json".into(), "base64".into(), "uuid".into()],
        selected_tool_id: Some("uuid".into()),
        pinned_tool_ids: vec!["base64".into()],
        ..AppStateSnapshot::default()
    }
}

fn press(
    setup: &Setup,
    deps: &RecordingDeps,
    event: &KeyPress,
    path: &str,
    focused: bool,
) -> Option<String> {
    let ctx = ExecutionContext::new(event, deps)
        .with_path(path)
        .with_input_focused(focused);
    setup
        .dispatcher
        .dispatch(&ctx)
        .command_id()
        .map(str::to_string)
}

#[test]
fn test_j_means_next_tool_in_tools() {
    let setup = setup(&KeyboardSettings::default());
    let deps = RecordingDeps::new(tools_state());

    let id = press(&setup, &deps, &KeyPress::new("J"), "/tools/uuid", false);
    assert_eq!(id.as_deref(), Some("tools.next-tool"));
    assert_eq!(deps.calls(), vec![DepsCall::Navigate("/tools/json".into())]);
}

#[test]
fn test_j_scrolls_on_post_and_moves_selection_on_list() {
    let setup = setup(&KeyboardSettings::default());
    let deps = RecordingDeps::default();

    let id = press(&setup, &deps, &KeyPress::new("j"), "/blog/rust-tips", false);
    assert_eq!(id.as_deref(), Some("blog.scroll-down"));

    let id = press(&setup, &deps, &KeyPress::new("ArrowDown"), "/blog", false);
    assert_eq!(id.as_deref(), Some("blog.next-post"));

    assert_eq!(
        deps.calls(),
        vec![
            DepsCall::Scroll(ScrollRequest::Down),
            DepsCall::MoveListSelection(1)
        ]
    );
}

#[test]
fn test_typing_blocks_section_shortcuts_but_not_globals() {
    let setup = setup(&KeyboardSettings::default());
    let deps = RecordingDeps::new(tools_state());

    assert_eq!(press(&setup, &deps, &KeyPress::new("j"), "/tools/uuid", true), None);

    let ctrl_b = KeyPress::new("b").with_modifiers(Modifiers::CTRL);
    let id = press(&setup, &deps, &ctrl_b, "/tools/uuid", true);
    assert_eq!(id.as_deref(), Some("global.toggle-sidebar"));
    assert!(ctrl_b.is_default_prevented());
}

#[test]
fn test_escape_precedence() {
    let setup = setup(&KeyboardSettings::default());

    // Focused input wins over everything else.
    let deps = RecordingDeps::new(tools_state());
    let id = press(&setup, &deps, &KeyPress::new("Escape"), "/tools/uuid", true);
    assert_eq!(id.as_deref(), Some("global.escape-input"));

    // An active search is cleared before leaving the tool.
    let deps = RecordingDeps::new(AppStateSnapshot {
        search_query: "base".into(),
        ..tools_state()
    });
    let id = press(&setup, &deps, &KeyPress::new("Escape"), "/tools/uuid", false);
    assert_eq!(id.as_deref(), Some("global.clear-search"));

    let deps = RecordingDeps::new(tools_state());
    let id = press(&setup, &deps, &KeyPress::new("Escape"), "/tools/uuid", false);
    assert_eq!(id.as_deref(), Some("tools.back-to-list"));

    let deps = RecordingDeps::default();
    let id = press(&setup, &deps, &KeyPress::new("Escape"), "/blog/rust-tips", false);
    assert_eq!(id.as_deref(), Some("blog.back-to-list"));
    let id = press(&setup, &deps, &KeyPress::new("Escape"), "/blog", false);
    assert_eq!(id.as_deref(), Some("blog.exit"));
}

#[test]
fn test_copy_output_spawns_effect() {
    let setup = setup(&KeyboardSettings::default());
    let deps = RecordingDeps::default();
    let event = KeyPress::new("C").with_modifiers(Modifiers::CTRL | Modifiers::SHIFT);

    let id = press(&setup, &deps, &event, "/tools/json", true);
    assert_eq!(id.as_deref(), Some("global.copy-output"));
    assert_eq!(setup.spawner.command_ids(), vec!["global.copy-output"]);
    assert_eq!(setup.spawner.run_all(), 1);
    assert_eq!(setup.recorder.command_ids(), vec!["global.copy-output"]);
}

#[test]
fn test_theme_and_section_switches() {
    let setup = setup(&KeyboardSettings::default());
    let deps = RecordingDeps::new(AppStateSnapshot {
        theme: Theme::Light,
        ..AppStateSnapshot::default()
    });

    let toggle = KeyPress::new("L").with_modifiers(Modifiers::CTRL | Modifiers::SHIFT);
    press(&setup, &deps, &toggle, "/", false);
    let go_blog = KeyPress::new("B").with_modifiers(Modifiers::CTRL | Modifiers::SHIFT);
    press(&setup, &deps, &go_blog, "/", false);

    let state = deps.snapshot();
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.active_section, Section::Blog);
}

#[test]
fn test_pinned_digit_opens_tool() {
    let setup = setup(&KeyboardSettings::default());
    let deps = RecordingDeps::new(tools_state());

    let id = press(&setup, &deps, &KeyPress::new("1"), "/", false);
    assert_eq!(id.as_deref(), Some("tools.open-pinned-1"));
    assert_eq!(press(&setup, &deps, &KeyPress::new("2"), "/", false), None);
}

#[test]
fn test_settings_override_and_disable() {
    let mut keybindings = KeybindOverrides::default();
    keybindings.insert("tools.next-tool", vec!["n".into()]);
    let mut settings = KeyboardSettings {
        keybindings,
        ..KeyboardSettings::default()
    };
    settings.disabled_commands.insert("global.toggle-sidebar".into());

    let setup = setup(&settings);
    let deps = RecordingDeps::new(tools_state());

    assert_eq!(press(&setup, &deps, &KeyPress::new("j"), "/tools/uuid", false), None);
    let id = press(&setup, &deps, &KeyPress::new("N"), "/tools/uuid", false);
    assert_eq!(id.as_deref(), Some("tools.next-tool"));

    let ctrl_b = KeyPress::new("b").with_modifiers(Modifiers::CTRL);
    assert_eq!(press(&setup, &deps, &ctrl_b, "/", false), None);
}

#[test]
fn test_help_listing_covers_catalog() {
    let setup = setup(&KeyboardSettings::default());
    let registry = setup.dispatcher.registry().read().unwrap();
    let info = registry.get_display_info(&StaticPlatform::APPLE);

    assert_eq!(info.len(), registry.len());
    let palette = info.iter().find(|i| i.id == "global.open-palette").unwrap();
    assert_eq!(palette.keys, vec!["⌘K"]);
    let next = info.iter().find(|i| i.id == "tools.next-tool").unwrap();
    assert_eq!(next.keys, vec!["J", "↓"]);
}

#[test]
fn test_shift_question_mark_toggles_help() {
    let setup = setup(&KeyboardSettings::default());
    let deps = RecordingDeps::default().with_help();
    let event = KeyPress::new("?").with_modifiers(Modifiers::SHIFT);

    let id = press(&setup, &deps, &event, "/tools/json", false);
    assert_eq!(id.as_deref(), Some("global.toggle-help"));
    assert!(event.is_default_prevented());
    assert_eq!(deps.calls(), vec![DepsCall::ToggleHelp]);
    assert_eq!(setup.recorder.command_ids(), vec!["global.toggle-help"]);
}

#[test]
fn test_help_needs_support_and_no_focused_input() {
    let setup = setup(&KeyboardSettings::default());

    let unsupported = RecordingDeps::default();
    let event = KeyPress::new("?").with_modifiers(Modifiers::SHIFT);
    assert_eq!(press(&setup, &unsupported, &event, "/", false), None);
    assert!(!event.is_default_prevented());

    let typing = RecordingDeps::default().with_help();
    let event = KeyPress::new("?").with_modifiers(Modifiers::SHIFT);
    assert_eq!(press(&setup, &typing, &event, "/", true), None);
    assert!(!event.is_default_prevented());

    assert!(unsupported.calls().is_empty());
    assert!(typing.calls().is_empty());
    assert!(setup.recorder.command_ids().is_empty());
}

#[test]
fn test_failed_copy_is_still_handled() {
    let setup = setup(&KeyboardSettings::default());
    let deps = RecordingDeps::default().with_failing_clipboard();
    let event = KeyPress::new("C").with_modifiers(Modifiers::CTRL | Modifiers::SHIFT);

    let id = press(&setup, &deps, &event, "/tools/json", false);
    assert_eq!(id.as_deref(), Some("global.copy-output"));
    assert!(event.is_default_prevented());
    assert_eq!(setup.spawner.command_ids(), vec!["global.copy-output"]);
    assert_eq!(setup.spawner.run_all(), 1);
    assert_eq!(deps.calls(), vec![DepsCall::CopyToClipboard]);
    assert_eq!(setup.recorder.command_ids(), vec!["global.copy-output"]);
}

#[test]
fn test_uppercase_override_requires_shift() {
    let mut keybindings = KeybindOverrides::default();
    keybindings.insert("tools.next-tool", vec!["N".into()]);
    let settings = KeyboardSettings {
        keybindings,
        ..KeyboardSettings::default()
    };
    let setup = setup(&settings);
    let deps = RecordingDeps::new(tools_state());

    assert_eq!(press(&setup, &deps, &KeyPress::new("n"), "/tools/uuid", false), None);
    let shifted = KeyPress::new("N").with_modifiers(Modifiers::SHIFT);
    let id = press(&setup, &deps, &shifted, "/tools/uuid", false);
    assert_eq!(id.as_deref(), Some("tools.next-tool"));
}
