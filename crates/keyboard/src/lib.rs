//! Keyboard command dispatch for the devtoolbox.
//!
//! A host registers `Command`s in a `CommandRegistry`, then feeds every key
//! press to a `Dispatcher` together with the ambient state (path, input focus,
//! active section). The dispatcher picks at most one command by context,
//! priority, binding, and guard, runs it, and reports whether the press was
//! consumed.
//!
//! Built-in catalogs for the global, tools, and blog contexts live in
//! `providers`; user settings are applied with `overrides`.

pub mod command;
pub mod context;
pub mod deps;
pub mod display;
pub mod dispatcher;
pub mod key;
pub mod overrides;
pub mod platform;
pub mod providers;
pub mod registry;
pub mod spawner;
pub mod telemetry;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use command::{Action, Category, Command, CommandError, Effect, Guard};
pub use context::{Context, ExecutionContext, Section};
pub use deps::{AppStateSnapshot, ScrollRequest, ShortcutDeps, Theme};
pub use display::{CommandDisplayInfo, format_binding};
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use key::{KeyBinding, KeyPress, Modifiers, matches};
pub use overrides::{apply_overrides, configure_commands};
pub use platform::{HostPlatform, Platform, StaticPlatform, UserAgentPlatform, platform_for};
pub use registry::{CommandRegistry, SharedRegistry};
pub use spawner::{DetachedSpawner, Spawner, TokioSpawner};
pub use telemetry::{
    InteractionRecorder, InteractionSource, METRIC_SHORTCUT_INVOCATIONS, MetricsRecorder,
    NoopRecorder,
};
