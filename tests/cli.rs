/*!
 * Command-line tests for the gpt-prompter binary
 */

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const PROMPT_START_MARKER: &str = "---- PROMPT START ----";

fn create_file(dir: &Path, relative: &str, content: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn setup_project() -> TempDir {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path();
    create_file(root, "a.py", "print(1)");
    create_file(root, "b.txt", "hello");
    create_file(root, "tests/test_a.py", "assert True");
    create_file(root, "node_modules/dep/index.js", "module.exports = {}");
    temp_dir
}

fn prompter() -> Command {
    let mut cmd = Command::cargo_bin("gpt-prompter").expect("Binary exists");
    cmd.env("RUST_LOG", "warn");
    cmd
}

#[test]
fn help_lists_every_flag() {
    prompter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--extension"))
        .stdout(predicate::str::contains("--filter"))
        .stdout(predicate::str::contains("--exclude"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--skip"))
        .stdout(predicate::str::contains("--quiet"));
}

#[test]
fn missing_flag_value_is_a_usage_error() {
    prompter()
        .arg("-e")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--extension"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    prompter().arg("--bogus").assert().failure().code(2);
}

#[test]
fn dry_run_lists_matching_files() {
    let project = setup_project();

    prompter()
        .current_dir(project.path())
        .args(["-d", "-e", "py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a.py\ntests/test_a.py\n"))
        .stdout(predicate::str::contains("Files found: 2"))
        .stdout(predicate::str::contains("b.txt").not())
        .stdout(predicate::str::contains(PROMPT_START_MARKER).not());
}

#[test]
fn dry_run_with_filters_and_skips() {
    let project = setup_project();

    prompter()
        .args(["--dry-run", "-f", "a", "-x", "test", "-s", "node_modules"])
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.py"))
        .stdout(predicate::str::contains("Files found: 1"))
        .stdout(predicate::str::contains("index.js").not())
        .stdout(predicate::str::contains("test_a.py").not());
}

#[test]
fn missing_path_is_a_warning() {
    let project = setup_project();

    prompter()
        .current_dir(project.path())
        .args(["-d", "does-not-exist", "a.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Files found: 1"))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn headless_run_still_prints_token_summary() {
    let project = setup_project();

    // No clipboard command can be found on an empty PATH
    prompter()
        .current_dir(project.path())
        .env("PATH", "")
        .env_remove("TMUX")
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .args(["-e", "py"])
        .assert()
        .success()
        .stdout(predicate::str::contains(PROMPT_START_MARKER))
        .stdout(predicate::str::contains("----FILE: a.py"))
        .stdout(predicate::str::contains("GPT-3.5"))
        .stderr(predicate::str::contains("clipboard"));
}

#[test]
#[ignore] // Requires a running tmux session
          // Run manually with: cargo test --test cli -- --ignored
fn copies_prompt_into_tmux_buffer() {
    if std::env::var("TMUX").is_err() {
        return;
    }
    let project = setup_project();

    prompter()
        .current_dir(project.path())
        .args(["-e", "py", "-s", "tests"])
        .assert()
        .success();

    let buffer = std::process::Command::new("tmux")
        .arg("show-buffer")
        .output()
        .unwrap();
    let buffer = String::from_utf8_lossy(&buffer.stdout);
    assert!(buffer.ends_with("----FILE: a.py\nprint(1)\n"));
}
