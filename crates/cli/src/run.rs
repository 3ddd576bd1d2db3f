//! Command routing.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Resolve the platform used for "Mod" bindings once for every command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Settings loading (see `main()`).

use anyhow::Result;
use devtoolbox_config::KeyboardSettings;
use devtoolbox_keyboard::platform_for;

use crate::args::{Cli, Commands};
use crate::commands;

pub(crate) async fn run_command(cli: Cli, settings: KeyboardSettings) -> Result<()> {
    let platform = platform_for(settings.platform);
    tracing::debug!(apple = platform.is_apple_like(), "Resolved platform");

    match cli.command {
        Commands::Keys { context, json } => {
            commands::keys::run(&settings, platform.as_ref(), context.map(Into::into), json)?;
        }
        Commands::Dispatch { key, host, json } => {
            commands::dispatch::run(&settings, platform, &key, &host, json).await?;
        }
        Commands::Listen { host } => {
            commands::listen::run(&settings, platform, &host).await?;
        }
        Commands::Settings => {
            commands::settings::run(&settings)?;
        }
    }

    Ok(())
}
