//! Error types for Feyn operations.
//!
//! This module provides the main error type [`FeynError`] which wraps the
//! conditions that can stop a diagram from being generated.

use std::{io, ops::Range, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// The main error type for Feyn operations.
///
/// # Diagnostic Variants
///
/// The `Script` variant carries the decay-script source and the byte span of
/// the offending value so callers can render a located report.
#[derive(Debug, Error)]
pub enum FeynError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Shared symbol definitions not found: {}", .0.display())]
    MissingSymbols(PathBuf),

    #[error("Failed to launch `{tool}`: {source}")]
    Launch {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("`{tool}` exited unsuccessfully ({status})")]
    Toolchain { tool: String, status: ExitStatus },

    #[error("{message}")]
    Script {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },
}

impl FeynError {
    /// Create a new `Script` error with the associated source text.
    pub fn new_script_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Script {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}
