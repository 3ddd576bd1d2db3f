//! Tests for the settings loader builder.
//!
//! Responsibilities:
//! - Test settings file reading and default fallbacks.
//! - Test environment variable handling and precedence.
//! - Test `.env` loading behavior.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write a settings file into `dir` and return its path.
pub fn write_settings_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("keymap.json");
    std::fs::write(&path, contents).expect("Failed to write settings file");
    path
}
