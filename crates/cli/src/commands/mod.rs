//! CLI command implementations.

pub mod dispatch;
pub mod keys;
pub mod listen;
pub mod settings;
