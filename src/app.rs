/*!
 * The prompt pipeline: scan, assemble, estimate, output
 */

use std::io::Write;

use log::debug;

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputSink;
use crate::prompt::{self, Prompt, PromptWriter};
use crate::scanner::Scanner;
use crate::tokenizer::{self, Model, TokenEstimate};

/// Everything a finished run produced
#[derive(Debug)]
pub struct RunReport {
    /// The assembled prompt
    pub prompt: Prompt,
    /// Token estimates for the prompt
    pub estimates: Vec<TokenEstimate>,
    /// Whether the prompt was written to the clipboard
    pub copied: bool,
}

/// Build the prompt for `config` without any output
pub fn build_prompt(config: &Config) -> Prompt {
    let scanner = Scanner::new(config);
    let writer = PromptWriter::new(prompt::preamble(config.quiet));
    writer.write(scanner.scan())
}

/// Run the whole pipeline, writing user-facing output to `out`
pub fn run<W: Write>(config: &Config, clipboard: &dyn Clipboard, out: W) -> Result<RunReport> {
    debug!("Running with {:?}", config);

    let prompt = build_prompt(config);
    debug!(
        "Assembled prompt from {} files ({} bytes)",
        prompt.files().len(),
        prompt.text().len()
    );

    let estimates = tokenizer::estimate_tokens(prompt.text(), &Model::DEFAULTS);

    let mut sink = OutputSink::new(out, clipboard);
    let copied = sink.emit(config, &prompt, &estimates)?;

    Ok(RunReport {
        prompt,
        estimates,
        copied,
    })
}
