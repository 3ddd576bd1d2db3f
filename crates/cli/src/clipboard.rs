//! System clipboard access backed by `arboard`.
//!
//! Invariants:
//! - An unavailable clipboard (headless session, no display server) is
//!   reported as an error, never a panic.

pub fn copy_to_clipboard(content: String) -> Result<(), String> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| format!("Clipboard unavailable: {e}"))?;
    clipboard
        .set_text(content)
        .map_err(|e| format!("Failed to write to clipboard: {e}"))
}
