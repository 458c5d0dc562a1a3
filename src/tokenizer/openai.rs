//! OpenAI tokenizer implementation using tiktoken

use tiktoken_rs::CoreBPE;

use super::Tokenizer;
use crate::tokenizer::error::{TokenizerError, TokenizerResult};
use crate::tokenizer::model::Model;

/// Tokenizer backed by the model's tiktoken BPE encoding
pub struct TiktokenTokenizer {
    encoding: CoreBPE,
}

impl TiktokenTokenizer {
    /// Load the encoding for `model`
    pub fn new(model: Model) -> TokenizerResult<Self> {
        let encoding = tiktoken_rs::get_bpe_from_model(model.model_id()).map_err(|e| {
            TokenizerError::EncodingUnavailable {
                model: model.model_id().to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self { encoding })
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn count_tokens(&self, text: &str) -> TokenizerResult<usize> {
        Ok(self.encoding.encode_ordinary(text).len())
    }
}
