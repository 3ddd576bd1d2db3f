//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to tell failures apart.
//! - Map errors in an `anyhow` chain to those codes.

use devtoolbox_config::{ConfigError, KeybindError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Settings file, environment, or keybinding overrides are invalid.
    ConfigError = 2,

    /// Terminal could not be used for the listener.
    TerminalError = 3,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Errors raised by the CLI itself.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Terminal unavailable: {0}")]
    Terminal(#[from] std::io::Error),
}

pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<ConfigError>().is_some()
                || cause.downcast_ref::<KeybindError>().is_some()
            {
                return ExitCode::ConfigError;
            }
            if cause.downcast_ref::<CliError>().is_some() {
                return ExitCode::TerminalError;
            }
        }
        ExitCode::GeneralError
    }
}
