//! `keys` command: list the registered shortcuts.

use std::collections::HashSet;
use std::fmt::Write as _;

use anyhow::{Context as _, Result};
use devtoolbox_config::KeyboardSettings;
use devtoolbox_keyboard::{Category, CommandDisplayInfo, Context, Platform};

use crate::engine::build_registry;

pub fn run(
    settings: &KeyboardSettings,
    platform: &dyn Platform,
    context: Option<Context>,
    json: bool,
) -> Result<()> {
    let registry = build_registry(settings)?;
    let mut info = registry.get_display_info(platform);

    if let Some(context) = context {
        let visible: HashSet<String> = registry
            .get_by_context(context)
            .iter()
            .map(|command| command.id().to_string())
            .collect();
        info.retain(|entry| visible.contains(&entry.id));
    }

    if json {
        let output =
            serde_json::to_string_pretty(&info).context("Failed to serialize shortcut list")?;
        println!("{output}");
    } else {
        print!("{}", render_table(&info));
    }
    Ok(())
}

/// Render shortcuts grouped by category, in category order.
pub fn render_table(info: &[CommandDisplayInfo]) -> String {
    let key_width = info
        .iter()
        .map(|entry| joined_keys(entry).chars().count())
        .max()
        .unwrap_or(0);
    let desc_width = info
        .iter()
        .map(|entry| entry.description.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for category in Category::ALL {
        let entries: Vec<&CommandDisplayInfo> =
            info.iter().filter(|entry| entry.category == category).collect();
        if entries.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", category.title());
        for entry in entries {
            let _ = writeln!(
                out,
                "  {:<key_width$}  {:<desc_width$}  {}",
                joined_keys(entry),
                entry.description,
                entry.id,
            );
        }
    }
    out
}

fn joined_keys(entry: &CommandDisplayInfo) -> String {
    entry.keys.join(", ")
}
