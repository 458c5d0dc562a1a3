/*!
 * Output sink: prints the run summary and copies the prompt
 */

use std::io::Write;

use log::error;

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::error::Result;
use crate::prompt::{file_header, Prompt};
use crate::report::{Reporter, PROMPT_END, PROMPT_START};
use crate::tokenizer::TokenEstimate;

/// Writes the user-facing output of a run and performs the clipboard write
pub struct OutputSink<'a, W: Write> {
    out: W,
    clipboard: &'a dyn Clipboard,
}

impl<'a, W: Write> OutputSink<'a, W> {
    pub fn new(out: W, clipboard: &'a dyn Clipboard) -> Self {
        Self { out, clipboard }
    }

    /// Emit the run's output.
    ///
    /// Returns whether the prompt reached the clipboard. Only failures to
    /// write to `out` are errors; a clipboard failure is reported and the
    /// token summary is still printed.
    pub fn emit(
        &mut self,
        config: &Config,
        prompt: &Prompt,
        estimates: &[TokenEstimate],
    ) -> Result<bool> {
        let reporter = Reporter::new(config);
        let files = prompt.files();

        if config.dry_run {
            if !files.is_empty() {
                writeln!(self.out, "{}", reporter.file_list(files))?;
            }
            writeln!(self.out, "{}", reporter.traversal_summary(files.len()))?;
            writeln!(self.out, "{}", reporter.token_table(estimates))?;
            return Ok(false);
        }

        writeln!(self.out, "{}", reporter.traversal_summary(files.len()))?;
        writeln!(self.out, "{}", PROMPT_START)?;
        for file in files {
            writeln!(self.out, "{}", file_header(file))?;
        }
        writeln!(self.out, "{}", PROMPT_END)?;

        let copied = match self.clipboard.copy_to_clipboard(prompt.text()) {
            Ok(()) => {
                writeln!(self.out, "Prompt copied to clipboard.")?;
                true
            }
            Err(err) => {
                error!("Unable to copy the prompt to the clipboard: {}", err);
                false
            }
        };

        writeln!(self.out, "{}", reporter.token_table(estimates))?;
        Ok(copied)
    }
}
