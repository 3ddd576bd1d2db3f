//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `run` module).
//! - Does not merge settings sources (see `devtoolbox_config::SettingsLoader`).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use devtoolbox_config::PlatformPreference;
use devtoolbox_keyboard::{Context, Theme};

#[derive(Parser)]
#[command(name = "devtoolbox-keys")]
#[command(about = "Inspect and exercise the devtoolbox keyboard shortcuts", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  devtoolbox-keys keys --context blog\n  devtoolbox-keys dispatch j --path /tools/json\n  devtoolbox-keys --platform mac dispatch Cmd+k --palette\n  devtoolbox-keys listen --path /blog\n"
)]
pub struct Cli {
    /// Path to a keymap settings file (overrides the default location).
    ///
    /// Can also be set via DEVTOOLBOX_KEYMAP_FILE.
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Modifier convention for "Mod" bindings (auto, mac, other)
    #[arg(long, global = true)]
    pub platform: Option<PlatformPreference>,

    /// Count shortcut invocations through the metrics facade
    #[arg(long, global = true)]
    pub telemetry: bool,

    /// Directory for the listener's rolling log file
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered shortcuts
    Keys {
        /// Only show commands that are candidates in this context
        #[arg(long, value_enum)]
        context: Option<ContextArg>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Simulate one key press and report which command handled it
    Dispatch {
        /// Key chord as the browser reports it (e.g., 'j', 'Shift+G', 'Ctrl+k', 'Mod+Shift+c')
        key: String,

        #[command(flatten)]
        host: HostArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Read key presses from the terminal and dispatch them until Ctrl+C
    Listen {
        #[command(flatten)]
        host: HostArgs,
    },

    /// Print the effective settings as JSON
    Settings,
}

/// Simulated host state for `dispatch` and `listen`.
#[derive(Args, Debug, Clone)]
pub struct HostArgs {
    /// Current route; `/blog...` selects the blog section
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Pretend a text input has focus
    #[arg(long)]
    pub input_focused: bool,

    /// Tool ids in sidebar order (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub tools: Vec<String>,

    /// Pinned tool ids (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub pinned: Vec<String>,

    /// Current search query
    #[arg(long, default_value = "")]
    pub search: String,

    /// Current theme
    #[arg(long, value_enum, default_value = "system")]
    pub theme: ThemeArg,

    /// Text the copy-output shortcut puts on the clipboard
    #[arg(long, value_name = "TEXT")]
    pub output: Option<String>,

    /// Host offers a command palette
    #[arg(long)]
    pub palette: bool,

    /// Host offers a shortcut help overlay
    #[arg(long)]
    pub help_overlay: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContextArg {
    Global,
    Tools,
    Blog,
}

impl From<ContextArg> for Context {
    fn from(arg: ContextArg) -> Self {
        match arg {
            ContextArg::Global => Context::Global,
            ContextArg::Tools => Context::Tools,
            ContextArg::Blog => Context::Blog,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    System,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::System => Theme::System,
        }
    }
}
