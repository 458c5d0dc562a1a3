//! Model definitions and metadata

use strum::{Display, EnumIter, EnumProperty};

/// Model profiles the prompt is estimated against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumProperty)]
pub enum Model {
    #[strum(
        to_string = "GPT-3.5",
        props(model_id = "gpt-3.5-turbo", context_window = "16385")
    )]
    Gpt35Turbo,

    #[strum(to_string = "GPT-4", props(model_id = "gpt-4", context_window = "8192"))]
    Gpt4,
}

impl Model {
    /// Profiles reported after every run
    pub const DEFAULTS: [Model; 2] = [Model::Gpt35Turbo, Model::Gpt4];

    /// Get the context window size for this model
    pub fn context_window(&self) -> usize {
        self.get_str("context_window")
            .and_then(|value| value.parse().ok())
            .unwrap_or(0)
    }

    /// Get the model identifier used to pick an encoding
    pub fn model_id(&self) -> &'static str {
        self.get_str("model_id").unwrap_or("unknown")
    }
}
