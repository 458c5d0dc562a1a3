/*!
 * Prompt assembly
 *
 * Concatenates a fixed preamble with one block per file:
 * `----FILE: <relative path>\n<contents>\n`.
 */

use std::fs;

use log::warn;

use crate::error::{PrompterError, Result};
use crate::types::FileEntry;

/// Preamble asking the model to describe the codebase
pub const MAIN_PROMPT: &str = "Review the provided codebase and describe its key functionalities. \
Should you require any missing files or further details for your analysis, kindly request:\n";

/// Preamble asking the model to only acknowledge the codebase
pub const QUIET_PROMPT: &str = "You've received a codebase. Acknowledge your understanding by \
responding with \"ACKNOWLEDGED\". If you notice missing files critical to your comprehension, \
please request them. Do not elaborate on the codebase's operation and skip explaining what it does:\n";

/// Marker that starts every file block
pub const FILE_HEADER: &str = "----FILE: ";

/// Pick the preamble for the quiet flag
pub fn preamble(quiet: bool) -> &'static str {
    if quiet {
        QUIET_PROMPT
    } else {
        MAIN_PROMPT
    }
}

/// Header line for a file block, without the trailing newline
pub fn file_header(relative: &str) -> String {
    format!("{}{}", FILE_HEADER, relative)
}

/// A fully assembled prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
    files: Vec<String>,
}

impl Prompt {
    /// The prompt text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Relative paths of the included files, in order
    pub fn files(&self) -> &[String] {
        &self.files
    }
}

/// Builds a [`Prompt`] from scanned files
pub struct PromptWriter<'a> {
    preamble: &'a str,
}

impl<'a> PromptWriter<'a> {
    /// Create a new writer with the given preamble
    pub fn new(preamble: &'a str) -> Self {
        Self { preamble }
    }

    /// Read every entry in order and append its block.
    ///
    /// Unreadable or non UTF-8 files are reported and left out.
    pub fn write<I>(&self, entries: I) -> Prompt
    where
        I: IntoIterator<Item = FileEntry>,
    {
        let mut text = String::from(self.preamble);
        let mut files = Vec::new();

        for entry in entries {
            let contents = match read_entry(&entry) {
                Ok(contents) => contents,
                Err(err) => {
                    warn!("{}. The file is skipped.", err);
                    continue;
                }
            };

            let relative = entry.display_path();
            push_block(&mut text, &relative, &contents);
            files.push(relative);
        }

        Prompt { text, files }
    }
}

fn read_entry(entry: &FileEntry) -> Result<String> {
    fs::read_to_string(&entry.path).map_err(|source| PrompterError::FileRead {
        path: entry.relative.clone(),
        source,
    })
}

fn push_block(text: &mut String, relative: &str, contents: &str) {
    text.push_str(&file_header(relative));
    text.push('\n');
    text.push_str(contents);
    text.push('\n');
}
