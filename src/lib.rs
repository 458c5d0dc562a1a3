/*!
 * gpt-prompter - Turn a codebase into a single LLM prompt
 *
 * Walks the given paths, keeps the files that pass the extension, name and
 * `.gitignore` rules, concatenates them behind a fixed preamble, estimates the
 * token count and copies the result to the clipboard.
 */

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod gitignore;
pub mod output;
pub mod prompt;
pub mod report;
pub mod scanner;
pub mod tokenizer;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export main components for easier access
pub use app::{build_prompt, run, RunReport};
pub use clipboard::{Clipboard, SystemClipboard};
pub use config::{Args, Config};
pub use error::{PrompterError, Result};
pub use prompt::{Prompt, PromptWriter, MAIN_PROMPT, QUIET_PROMPT};
pub use scanner::Scanner;
pub use types::FileEntry;
