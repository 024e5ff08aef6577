//! Subcommand implementations.

pub mod catalog;
pub mod render;

use std::path::PathBuf;

/// Errors raised while loading command input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("Invalid flash message '{0}', expected CATEGORY=TEXT")]
    FlashMessage(String),
    #[error("Invalid HTML attribute '{0}', expected NAME=VALUE")]
    Attribute(String),
}

/// Print rendered output.
#[allow(clippy::print_stdout)]
pub fn emit(output: &str) {
    println!("{output}");
}
