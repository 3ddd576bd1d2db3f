//! `listen` command: dispatch live key presses from the terminal.
//!
//! Responsibilities:
//! - Put the terminal in raw mode and read key events with crossterm.
//! - Translate crossterm key events into browser-style `KeyPress` values.
//! - Print one line per press describing the outcome and host effects.
//!
//! Does NOT handle:
//! - Logging to the terminal; the caller routes tracing to a file while raw mode is on.
//!
//! Invariants:
//! - Raw mode is disabled on every exit path, including panics.
//! - Ctrl+C and Ctrl+D end the session; F2 toggles the simulated input focus.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use devtoolbox_config::KeyboardSettings;
use devtoolbox_keyboard::{DispatchOutcome, ExecutionContext, KeyPress, Modifiers, Platform};
use futures::StreamExt;

use super::dispatch::outcome_label;
use crate::args::HostArgs;
use crate::engine::{TrackedSpawner, build_dispatcher};
use crate::error::CliError;
use crate::host::ConsoleHost;

/// Disables raw mode when dropped.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

pub async fn run(
    settings: &KeyboardSettings,
    platform: Arc<dyn Platform>,
    host_args: &HostArgs,
) -> Result<()> {
    let spawner = Arc::new(TrackedSpawner::new());
    let dispatcher = build_dispatcher(settings, platform, spawner.clone())?;
    let host = ConsoleHost::from_args(host_args);

    enable_raw_mode().map_err(CliError::Terminal)?;
    let guard = TerminalGuard;

    print_line(&format!(
        "Listening at {} (F2 toggles input focus, Ctrl+C quits)",
        host.path()
    ));
    tracing::info!(path = %host.path(), "Listener started");

    let mut reader = EventStream::new();
    while let Some(event) = reader.next().await {
        let event = event.map_err(CliError::Terminal)?;
        let Event::Key(key) = event else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if is_quit(&key) {
            break;
        }
        if key.code == KeyCode::F(2) {
            let focused = host.toggle_input_focus();
            print_line(&format!("input focused: {focused}"));
            continue;
        }
        let Some(press) = key_press_from_event(&key) else {
            tracing::debug!(code = ?key.code, "Ignoring key without a browser equivalent");
            continue;
        };

        let path = host.path();
        let ctx = ExecutionContext::new(&press, &host)
            .with_path(&path)
            .with_input_focused(host.input_focused());
        let outcome = dispatcher.dispatch(&ctx);
        print_line(&describe(&press, &outcome, &host.take_effects()));
    }

    drop(guard);
    spawner.drain().await;
    tracing::info!("Listener stopped");
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
}

/// Translate a crossterm key event into the press a browser would report.
pub fn key_press_from_event(event: &KeyEvent) -> Option<KeyPress> {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return None,
    };

    let flags = event.modifiers;
    let uppercase_letter = matches!(event.code, KeyCode::Char(c) if c.is_uppercase());

    let mut modifiers = Modifiers::empty();
    modifiers.set(Modifiers::CTRL, flags.contains(KeyModifiers::CONTROL));
    modifiers.set(
        Modifiers::META,
        flags.intersects(KeyModifiers::SUPER | KeyModifiers::META),
    );
    modifiers.set(
        Modifiers::SHIFT,
        flags.contains(KeyModifiers::SHIFT) || event.code == KeyCode::BackTab || uppercase_letter,
    );
    modifiers.set(Modifiers::ALT, flags.contains(KeyModifiers::ALT));

    Some(KeyPress::new(key).with_modifiers(modifiers))
}

fn describe(press: &KeyPress, outcome: &DispatchOutcome, effects: &[String]) -> String {
    let key = if press.key() == " " { "Space" } else { press.key() };
    let mut line = match outcome.command_id() {
        Some(command) => format!("{key} -> {} {command}", outcome_label(outcome)),
        None => format!("{key} -> unhandled"),
    };
    if !effects.is_empty() {
        line.push_str(&format!(" [{}]", effects.join("; ")));
    }
    line
}

/// Raw mode needs an explicit carriage return.
fn print_line(line: &str) {
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "{line}\r\n");
    let _ = stdout.flush();
}
