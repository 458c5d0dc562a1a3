//! Global error handling for gpt-prompter
//!
//! Centralized error type for the pipeline. Most failures are degraded into
//! warnings by the stage that owns them; what reaches `main` is fatal.
//! Clipboard and tokenizer failures have their own error types and never
//! abort a run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Global error type for gpt-prompter operations
#[derive(Error, Debug)]
pub enum PrompterError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A file could not be read or decoded as UTF-8
    #[error("Unable to read the file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal errors
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Ignore file parsing errors
    #[error("Ignore rule error: {0}")]
    Ignore(#[from] ignore::Error),
}

/// Specialized Result type for gpt-prompter operations
pub type Result<T> = std::result::Result<T, PrompterError>;
