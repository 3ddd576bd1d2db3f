//! Dispatch behaviour across contexts, priorities, and guards.

use std::sync::Arc;

use devtoolbox_keyboard::testing::{CollectingSpawner, DepsCall, RecordingDeps, RecordingRecorder};
use devtoolbox_keyboard::{
    Command, CommandRegistry, Context, DispatchOutcome, Dispatcher, Effect, ExecutionContext,
    InteractionSource, KeyBinding, KeyPress, Modifiers, Section, StaticPlatform,
};

fn dispatcher(commands: Vec<Command>, apple: bool) -> (Dispatcher, Arc<RecordingRecorder>) {
    let mut registry = CommandRegistry::new();
    registry.register_all(commands);
    let recorder = Arc::new(RecordingRecorder::default());
    let dispatcher = Dispatcher::new(registry.into_shared(), Arc::new(StaticPlatform(apple)))
        .with_recorder(recorder.clone())
        .with_spawner(Arc::new(CollectingSpawner::default()));
    (dispatcher, recorder)
}

fn navigating(id: &str, key: &str, context: Context, path: &'static str) -> Command {
    Command::new(id, id)
        .with_binding(KeyBinding::new(key))
        .with_context(context)
        .with_action(move |ctx| {
            ctx.deps.navigate(path);
            Ok(Effect::Done)
        })
}

#[test]
fn test_context_isolation() {
    let (dispatcher, recorder) = dispatcher(
        vec![
            navigating("t1", "x", Context::Tools, "/t1"),
            navigating("b1", "x", Context::Blog, "/b1"),
        ],
        false,
    );
    let deps = RecordingDeps::default();

    let event = KeyPress::new("x");
    let ctx = ExecutionContext::new(&event, &deps).with_section(Section::Tools);
    assert!(dispatcher.handle_key_event(&ctx));

    let event = KeyPress::new("x");
    let ctx = ExecutionContext::new(&event, &deps).with_section(Section::Blog);
    assert!(dispatcher.handle_key_event(&ctx));

    assert_eq!(
        deps.calls(),
        vec![DepsCall::Navigate("/t1".into()), DepsCall::Navigate("/b1".into())]
    );
    assert_eq!(
        recorder.events(),
        vec![
            ("t1".to_string(), InteractionSource::Keyboard),
            ("b1".to_string(), InteractionSource::Keyboard)
        ]
    );
}

#[test]
fn test_global_command_fires_in_every_section() {
    let (dispatcher, _) = dispatcher(vec![navigating("g", "x", Context::Global, "/g")], false);
    let deps = RecordingDeps::default();

    for section in [Section::Tools, Section::Blog] {
        let event = KeyPress::new("x");
        let ctx = ExecutionContext::new(&event, &deps).with_section(section);
        assert!(dispatcher.handle_key_event(&ctx));
    }
    assert_eq!(deps.calls().len(), 2);
}

#[test]
fn test_escape_input_beats_section_escape_while_focused() {
    let (dispatcher, recorder) = dispatcher(
        vec![
            Command::new("esc-nav", "Leave blog")
                .with_binding(KeyBinding::new("Escape"))
                .with_context(Context::Blog)
                .with_priority(60)
                .with_guard(|ctx| !ctx.is_input_focused)
                .with_action(|ctx| {
                    ctx.deps.navigate("/");
                    Ok(Effect::Done)
                }),
            Command::new("esc-input", "Clear input")
                .with_binding(KeyBinding::new("Escape"))
                .with_context(Context::Global)
                .with_priority(50)
                .with_guard(|ctx| ctx.is_input_focused)
                .with_action(|ctx| {
                    ctx.deps.clear_inputs();
                    Ok(Effect::Done)
                }),
        ],
        false,
    );
    let deps = RecordingDeps::default();
    let event = KeyPress::new("Escape");
    let ctx = ExecutionContext::new(&event, &deps)
        .with_path("/blog/post")
        .with_input_focused(true);

    let outcome = dispatcher.dispatch(&ctx);
    assert_eq!(
        outcome,
        DispatchOutcome::Handled {
            command_id: "esc-input".into()
        }
    );
    assert!(event.is_default_prevented());
    assert_eq!(deps.calls(), vec![DepsCall::ClearInputs]);
    assert_eq!(recorder.command_ids(), vec!["esc-input"]);
}

#[test]
fn test_high_priority_guard_failure_falls_through() {
    let (dispatcher, _) = dispatcher(
        vec![
            navigating("fallback", "x", Context::Global, "/fallback"),
            Command::new("picky", "Picky")
                .with_binding(KeyBinding::new("x"))
                .with_priority(100)
                .with_guard(|ctx| ctx.current_path == "/special")
                .with_action(|ctx| {
                    ctx.deps.navigate("/picky");
                    Ok(Effect::Done)
                }),
        ],
        false,
    );
    let deps = RecordingDeps::default();

    let event = KeyPress::new("x");
    let ctx = ExecutionContext::new(&event, &deps).with_path("/special");
    assert_eq!(dispatcher.dispatch(&ctx).command_id(), Some("picky"));

    let event = KeyPress::new("x");
    let ctx = ExecutionContext::new(&event, &deps).with_path("/elsewhere");
    assert_eq!(dispatcher.dispatch(&ctx).command_id(), Some("fallback"));
}

#[test]
fn test_overwrite_replaces_definition_for_dispatch() {
    let (dispatcher, _) = dispatcher(vec![navigating("dup", "x", Context::Global, "/old")], false);
    dispatcher
        .registry()
        .write()
        .unwrap()
        .register(navigating("dup", "y", Context::Global, "/new"));
    let deps = RecordingDeps::default();

    let old = KeyPress::new("x");
    assert!(!dispatcher.handle_key_event(&ExecutionContext::new(&old, &deps)));
    let new = KeyPress::new("y");
    assert!(dispatcher.handle_key_event(&ExecutionContext::new(&new, &deps)));
    assert_eq!(deps.calls(), vec![DepsCall::Navigate("/new".into())]);
}

#[test]
fn test_unregistered_command_no_longer_fires() {
    let (dispatcher, _) = dispatcher(vec![navigating("gone", "x", Context::Global, "/")], false);
    assert!(dispatcher.registry().write().unwrap().unregister("gone"));

    let deps = RecordingDeps::default();
    let event = KeyPress::new("x");
    assert!(!dispatcher.handle_key_event(&ExecutionContext::new(&event, &deps)));
    assert!(!event.is_default_prevented());
}

#[test]
fn test_mod_binding_respects_platform() {
    let palette = || {
        Command::new("palette", "Palette")
            .with_binding(KeyBinding::new("k").with_mod())
            .with_action(|ctx| {
                ctx.deps.open_palette();
                Ok(Effect::Done)
            })
    };
    let deps = RecordingDeps::default();

    let (mac, _) = dispatcher(vec![palette()], true);
    let cmd_k = KeyPress::new("k").with_modifiers(Modifiers::META);
    let ctrl_k = KeyPress::new("k").with_modifiers(Modifiers::CTRL);
    assert!(mac.handle_key_event(&ExecutionContext::new(&cmd_k, &deps)));
    assert!(!mac.handle_key_event(&ExecutionContext::new(&ctrl_k, &deps)));

    let (pc, _) = dispatcher(vec![palette()], false);
    let cmd_k = KeyPress::new("k").with_modifiers(Modifiers::META);
    let ctrl_k = KeyPress::new("k").with_modifiers(Modifiers::CTRL);
    assert!(pc.handle_key_event(&ExecutionContext::new(&ctrl_k, &deps)));
    assert!(!pc.handle_key_event(&ExecutionContext::new(&cmd_k, &deps)));
}

#[test]
fn test_unhandled_key_leaves_everything_untouched() {
    let (dispatcher, recorder) =
        dispatcher(vec![navigating("t1", "x", Context::Tools, "/t1")], false);
    let deps = RecordingDeps::default();
    let event = KeyPress::new("x");
    let ctx = ExecutionContext::new(&event, &deps).with_section(Section::Blog);

    assert_eq!(dispatcher.dispatch(&ctx), DispatchOutcome::Unhandled);
    assert!(!event.is_default_prevented());
    assert!(deps.calls().is_empty());
    assert!(recorder.events().is_empty());
}
