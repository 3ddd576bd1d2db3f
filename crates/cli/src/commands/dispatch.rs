//! `dispatch` command: simulate a single key press.
//!
//! Responsibilities:
//! - Turn a chord string into the `KeyPress` a browser would deliver.
//! - Run it through the dispatcher against a `ConsoleHost` and report the outcome.
//!
//! Invariants:
//! - Pending effects finish before the report is printed.

use std::sync::Arc;

use anyhow::{Context as _, Result};
use devtoolbox_config::{KeybindError, KeyboardSettings, parse_key};
use devtoolbox_keyboard::{
    AppStateSnapshot, DispatchOutcome, ExecutionContext, KeyPress, Modifiers, Platform,
};
use serde::Serialize;

use crate::args::HostArgs;
use crate::engine::{TrackedSpawner, build_dispatcher};
use crate::host::ConsoleHost;

#[derive(Debug, Serialize)]
struct DispatchReport<'a> {
    key: &'a str,
    outcome: &'static str,
    command: Option<&'a str>,
    default_prevented: bool,
    effects: Vec<String>,
    state: AppStateSnapshot,
}

pub async fn run(
    settings: &KeyboardSettings,
    platform: Arc<dyn Platform>,
    chord: &str,
    host_args: &HostArgs,
    json: bool,
) -> Result<()> {
    let event = key_press_from_chord(chord, platform.as_ref())
        .with_context(|| format!("Invalid key chord '{chord}'"))?;

    let spawner = Arc::new(TrackedSpawner::new());
    let dispatcher = build_dispatcher(settings, platform, spawner.clone())?;
    let host = ConsoleHost::from_args(host_args);
    let path = host.path();

    let ctx = ExecutionContext::new(&event, &host)
        .with_path(&path)
        .with_input_focused(host.input_focused());
    let outcome = dispatcher.dispatch(&ctx);
    spawner.drain().await;

    let report = DispatchReport {
        key: chord,
        outcome: outcome_label(&outcome),
        command: outcome.command_id(),
        default_prevented: event.is_default_prevented(),
        effects: host.take_effects(),
        state: host.snapshot(),
    };

    if json {
        let output =
            serde_json::to_string_pretty(&report).context("Failed to serialize dispatch report")?;
        println!("{output}");
    } else {
        print!("{}", render_report(&report));
    }
    Ok(())
}

/// Build the key press a browser reports for `chord`.
///
/// `Mod`/`CmdOrCtrl` resolve to the platform's command key. A single letter
/// with Shift is reported uppercase, and an uppercase letter implies Shift.
pub fn key_press_from_chord(chord: &str, platform: &dyn Platform) -> Result<KeyPress, KeybindError> {
    let parsed = parse_key(chord)?;
    let wants_mod = chord.split('+').any(|part| {
        matches!(
            part.trim().to_ascii_lowercase().as_str(),
            "mod" | "cmdorctrl"
        )
    });

    let mut modifiers = Modifiers::empty();
    if wants_mod {
        modifiers.insert(if platform.is_apple_like() {
            Modifiers::META
        } else {
            Modifiers::CTRL
        });
    } else {
        modifiers.set(Modifiers::CTRL, parsed.modifiers.ctrl);
    }
    if parsed.modifiers.meta {
        modifiers.insert(Modifiers::META);
    }
    modifiers.set(Modifiers::SHIFT, parsed.modifiers.shift);
    modifiers.set(Modifiers::ALT, parsed.modifiers.alt);

    let mut key = parsed.key;
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && c.is_alphabetic()
    {
        if modifiers.contains(Modifiers::SHIFT) {
            key = c.to_uppercase().collect();
        } else if c.is_uppercase() {
            modifiers.insert(Modifiers::SHIFT);
        }
    }

    Ok(KeyPress::new(key).with_modifiers(modifiers))
}

pub(crate) fn outcome_label(outcome: &DispatchOutcome) -> &'static str {
    match outcome {
        DispatchOutcome::Handled { .. } => "handled",
        DispatchOutcome::Failed { .. } => "failed",
        DispatchOutcome::Unhandled => "unhandled",
    }
}

fn render_report(report: &DispatchReport<'_>) -> String {
    let mut out = match report.command {
        Some(command) => format!("{}: {} by {}\n", report.key, report.outcome, command),
        None => format!("{}: not handled\n", report.key),
    };
    for effect in &report.effects {
        out.push_str("  ");
        out.push_str(effect);
        out.push('\n');
    }
    out
}
