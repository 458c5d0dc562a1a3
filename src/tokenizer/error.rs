//! Error types for the tokenizer module

use thiserror::Error;

/// Result type for tokenizer operations
pub type TokenizerResult<T> = Result<T, TokenizerError>;

/// Errors that can occur during tokenization
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// No encoding is known for the model
    #[error("No encoding available for model {model}: {reason}")]
    EncodingUnavailable { model: String, reason: String },

    /// Error from tokenizer library
    #[error("Tokenizer error: {0}")]
    TokenizerError(String),
}
