//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a message log
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
