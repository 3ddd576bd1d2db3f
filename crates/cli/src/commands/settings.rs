//! `settings` command: print the effective settings.

use anyhow::{Context as _, Result};
use devtoolbox_config::KeyboardSettings;

pub fn run(settings: &KeyboardSettings) -> Result<()> {
    let output =
        serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    println!("{output}");
    Ok(())
}
