/*!
 * Reporting functionality for gpt-prompter
 *
 * Renders the traversal summary and the token estimate table printed after
 * every run. The table uses tabled for consistent console output.
 */

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::config::Config;
use crate::tokenizer::TokenEstimate;

/// Marker printed before the prompt outline
pub const PROMPT_START: &str = "---- PROMPT START ----";

/// Marker printed after the prompt outline
pub const PROMPT_END: &str = "---- PROMPT END ----";

/// Report generator for a run
pub struct Reporter<'a> {
    config: &'a Config,
}

impl<'a> Reporter<'a> {
    /// Create a new reporter
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Settings in effect and the number of files found
    pub fn traversal_summary(&self, files_found: usize) -> String {
        let paths: Vec<String> = self
            .config
            .paths
            .iter()
            .map(|path| path.display().to_string())
            .collect();

        format!(
            "Including for prompt: {:?}\n\
             Including filename patterns: {:?}\n\
             Excluding filename patterns: {:?}\n\
             Excluding dirname patterns: {:?}\n\
             Extensions to be used: {:?}\n\
             Files found: {}",
            paths,
            self.config.filters,
            self.config.excludes,
            self.config.skips,
            self.config.extensions,
            files_found
        )
    }

    /// One line per file
    pub fn file_list(&self, files: &[String]) -> String {
        files.join("\n")
    }

    /// Table of token estimates per model
    pub fn token_table(&self, estimates: &[TokenEstimate]) -> String {
        #[derive(Tabled)]
        struct TokenRow {
            #[tabled(rename = "Model")]
            model: String,

            #[tabled(rename = "Tokens")]
            tokens: String,

            #[tabled(rename = "Context Window")]
            context: String,
        }

        let rows: Vec<TokenRow> = estimates
            .iter()
            .map(|estimate| {
                let tokens = match &estimate.tokens {
                    Ok(tokens) => format!("~{}", tokens),
                    Err(_) => "unavailable".to_string(),
                };
                let context = match estimate.context_usage() {
                    Some(usage) => format!(
                        "{:.1}% of {}",
                        usage,
                        format_number(estimate.model.context_window())
                    ),
                    None => "-".to_string(),
                };

                TokenRow {
                    model: estimate.model.to_string(),
                    tokens,
                    context,
                }
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }
}

/// Format a number with human-readable units
fn format_number(num: usize) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}
