//! Tokenizer module for token counting with different LLM models
//!
//! Token counts are estimates: each model profile is counted with its own
//! encoding, and a profile that cannot be counted does not stop the others.

mod error;
mod model;
mod openai;

// Re-exports for public API
pub use error::{TokenizerError, TokenizerResult};
pub use model::Model;
pub use openai::TiktokenTokenizer;

/// Trait defining the interface for tokenizers
pub trait Tokenizer {
    /// Count tokens in the given text
    fn count_tokens(&self, text: &str) -> TokenizerResult<usize>;
}

/// Create a tokenizer for the specified model
pub fn create_tokenizer(model: Model) -> TokenizerResult<Box<dyn Tokenizer>> {
    Ok(Box::new(TiktokenTokenizer::new(model)?))
}

/// Token count of a text for one model profile
#[derive(Debug)]
pub struct TokenEstimate {
    /// Model the text was counted for
    pub model: Model,
    /// Number of tokens, or why it could not be counted
    pub tokens: TokenizerResult<usize>,
}

impl TokenEstimate {
    /// Fraction of the model's context window used, in percent
    pub fn context_usage(&self) -> Option<f64> {
        let tokens = *self.tokens.as_ref().ok()?;
        let window = self.model.context_window();
        if window == 0 {
            return None;
        }
        Some(tokens as f64 / window as f64 * 100.0)
    }
}

/// Estimate `text` for each model using the bundled tiktoken encodings
pub fn estimate_tokens(text: &str, models: &[Model]) -> Vec<TokenEstimate> {
    estimate_tokens_with(text, models, create_tokenizer)
}

/// Estimate `text` for each model with tokenizers built by `factory`
pub fn estimate_tokens_with<F>(text: &str, models: &[Model], factory: F) -> Vec<TokenEstimate>
where
    F: Fn(Model) -> TokenizerResult<Box<dyn Tokenizer>>,
{
    models
        .iter()
        .map(|&model| {
            let tokens = factory(model).and_then(|tokenizer| tokenizer.count_tokens(text));
            if let Err(err) = &tokens {
                log::warn!("Token estimate for {} unavailable: {}", model, err);
            }
            TokenEstimate { model, tokens }
        })
        .collect()
}
