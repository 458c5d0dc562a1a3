/*!
 * Tests for the prompt pipeline
 */

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::{tempdir, TempDir};

use crate::app::{build_prompt, run};
use crate::clipboard::{self, Clipboard, ClipboardError};
use crate::config::Config;
use crate::prompt::{MAIN_PROMPT, QUIET_PROMPT};
use crate::report::{PROMPT_END, PROMPT_START};

/// Clipboard that keeps everything it is given
#[derive(Default)]
struct RecordingClipboard {
    copies: RefCell<Vec<String>>,
}

impl Clipboard for RecordingClipboard {
    fn copy_to_clipboard(&self, text: &str) -> clipboard::Result<()> {
        self.copies.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Clipboard of a headless machine
struct UnavailableClipboard;

impl Clipboard for UnavailableClipboard {
    fn copy_to_clipboard(&self, _text: &str) -> clipboard::Result<()> {
        Err(ClipboardError::NoClipboardFound)
    }
}

fn create_file(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

// a.py and b.txt at the root
fn setup_scenario_directory() -> TempDir {
    let temp_dir = tempdir().unwrap();
    create_file(temp_dir.path(), "a.py", "print(1)");
    create_file(temp_dir.path(), "b.txt", "hello");
    temp_dir
}

fn python_only(root: &Path) -> Config {
    Config {
        extensions: vec!["py".into()],
        ..Config::for_path(root)
    }
}

#[test]
fn test_live_run_copies_prompt() {
    let temp_dir = setup_scenario_directory();
    let config = python_only(temp_dir.path());
    let clipboard = RecordingClipboard::default();
    let mut out = Vec::new();

    let report = run(&config, &clipboard, &mut out).unwrap();

    let expected = format!("{}----FILE: a.py\nprint(1)\n", MAIN_PROMPT);
    assert_eq!(report.prompt.text(), expected);
    assert_eq!(report.prompt.files(), ["a.py"]);
    assert!(report.copied);
    assert_eq!(*clipboard.copies.borrow(), vec![expected]);

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Files found: 1"));
    assert!(output.contains(PROMPT_START));
    assert!(output.contains("----FILE: a.py"));
    assert!(output.contains(PROMPT_END));
    assert!(output.contains("GPT-3.5"));
    assert!(output.contains("GPT-4"));
    assert!(!output.contains("b.txt"));
}

#[test]
fn test_dry_run_never_touches_clipboard() {
    let temp_dir = setup_scenario_directory();
    let config = Config {
        dry_run: true,
        ..python_only(temp_dir.path())
    };
    let clipboard = RecordingClipboard::default();
    let mut out = Vec::new();

    let report = run(&config, &clipboard, &mut out).unwrap();

    assert!(!report.copied);
    assert!(clipboard.copies.borrow().is_empty());

    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("a.py\n"));
    assert!(output.contains("Files found: 1"));
    assert!(!output.contains(PROMPT_START));
}

#[test]
fn test_quiet_run_uses_quiet_preamble() {
    let temp_dir = setup_scenario_directory();
    let config = Config {
        quiet: true,
        ..Config::for_path(temp_dir.path())
    };

    let prompt = build_prompt(&config);

    assert_eq!(
        prompt.text(),
        format!(
            "{}----FILE: a.py\nprint(1)\n----FILE: b.txt\nhello\n",
            QUIET_PROMPT
        )
    );
}

#[test]
fn test_clipboard_failure_still_reports_tokens() {
    let temp_dir = setup_scenario_directory();
    let config = python_only(temp_dir.path());
    let mut out = Vec::new();

    let report = run(&config, &UnavailableClipboard, &mut out).unwrap();

    assert!(!report.copied);
    assert_eq!(report.estimates.len(), 2);
    assert!(report.estimates.iter().all(|e| e.tokens.is_ok()));

    let output = String::from_utf8(out).unwrap();
    assert!(!output.contains("Prompt copied to clipboard."));
    assert!(output.contains("GPT-4"));
}

#[test]
fn test_empty_tree_yields_preamble_only() {
    let temp_dir = tempdir().unwrap();
    let prompt = build_prompt(&Config::for_path(temp_dir.path()));

    assert_eq!(prompt.text(), MAIN_PROMPT);
    assert!(prompt.files().is_empty());
}

#[test]
fn test_runs_are_deterministic() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    create_file(root, "zeta.rs", "z");
    create_file(root, "alpha/beta.rs", "b");
    create_file(root, "alpha/alpha.rs", "a");
    create_file(root, "Makefile", "all:");
    create_file(root, ".gitignore", "*.log\n");
    create_file(root, "debug.log", "noise");

    let config = Config::for_path(root);
    let first = build_prompt(&config);
    let second = build_prompt(&config);

    assert_eq!(first, second);
    assert_eq!(
        first.files(),
        ["Makefile", "alpha/alpha.rs", "alpha/beta.rs", "zeta.rs"]
    );
}

#[test]
fn test_skipped_directory_contents_never_appear() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    create_file(root, "app.js", "run()");
    create_file(root, "node_modules/pkg/index.js", "module.exports = 1");
    create_file(root, "node_modules/pkg/app.js", "shadow");

    let config = Config {
        skips: vec!["node_modules".into()],
        filters: vec!["app".into()],
        ..Config::for_path(root)
    };
    let prompt = build_prompt(&config);

    assert_eq!(prompt.files(), ["app.js"]);
    assert!(!prompt.text().contains("shadow"));
}

#[test]
fn test_unreadable_file_does_not_abort_run() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("blob.bin"), [0xffu8, 0xfe, 0x00, 0x81]).unwrap();
    create_file(root, "main.rs", "fn main() {}");

    let clipboard = RecordingClipboard::default();
    let report = run(&Config::for_path(root), &clipboard, Vec::new()).unwrap();

    assert_eq!(report.prompt.files(), ["main.rs"]);
    assert!(report.copied);
}

#[test]
fn test_multiple_roots_keep_argument_order() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    create_file(root, "src/lib.rs", "pub fn lib() {}");
    create_file(root, "tests/it.rs", "#[test] fn it() {}");

    let config = Config {
        paths: vec![root.join("tests"), root.join("src")],
        ..Config::default()
    };
    let prompt = build_prompt(&config);

    assert_eq!(prompt.files(), ["it.rs", "lib.rs"]);
}
