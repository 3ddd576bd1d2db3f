//! Shared test utilities for devtoolbox-keys integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point every run at a throwaway settings file so the user's keymap never leaks in.
//!
//! Invariants / Assumptions:
//! - The returned `TempDir` must outlive the command.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `devtoolbox-keys` command using `settings_json` as its settings file.
pub fn keys_cmd_with_settings(settings_json: &str) -> (Command, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let path: PathBuf = dir.path().join("keymap.json");
    std::fs::write(&path, settings_json).expect("write settings file");

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("devtoolbox-keys");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("DEVTOOLBOX_KEYMAP_FILE", &path);

    // Clear potential host leakage
    cmd.env_remove("DEVTOOLBOX_PLATFORM")
        .env_remove("DEVTOOLBOX_TELEMETRY")
        .env_remove("DEVTOOLBOX_LOG_DIR")
        .env_remove("RUST_LOG");

    (cmd, dir)
}

/// Returns a hermetic `devtoolbox-keys` command with empty settings.
pub fn keys_cmd() -> (Command, TempDir) {
    keys_cmd_with_settings("{}")
}
