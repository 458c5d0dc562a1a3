/*!
 * Clipboard support for gpt-prompter
 *
 * Copies the prompt to the system clipboard by piping it into whichever
 * clipboard command the platform provides.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use log::{debug, warn};
use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Trait for clipboard operations
pub trait Clipboard {
    /// Copy text to the clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
}

/// The system clipboard, reached through the first working clipboard command
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let providers = ClipboardProvider::detect();
        if providers.is_empty() {
            return Err(ClipboardError::NoClipboardFound);
        }

        let mut last_error = ClipboardError::NoClipboardFound;
        for provider in providers {
            match provider.copy_to_clipboard(text) {
                Ok(()) => {
                    debug!("Copied {} bytes with {:?}", text.len(), provider);
                    return Ok(());
                }
                Err(err) => {
                    warn!("Clipboard provider {:?} failed: {}", provider, err);
                    last_error = err;
                }
            }
        }

        Err(last_error)
    }
}

/// Available clipboard providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardProvider {
    /// tmux paste buffer
    Tmux,
    /// X11 clipboard with xclip
    Xclip,
    /// X11 clipboard with xsel
    Xsel,
    /// Wayland clipboard
    Wayland,
    /// macOS clipboard
    MacOS,
    /// Windows clipboard (native or via WSL)
    Windows,
    /// Termux clipboard
    Termux,
}

impl ClipboardProvider {
    /// Command that reads the text from stdin
    pub fn program(&self) -> &'static str {
        match self {
            Self::Tmux => "tmux",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::Wayland => "wl-copy",
            Self::MacOS => "pbcopy",
            Self::Windows => "clip.exe",
            Self::Termux => "termux-clipboard-set",
        }
    }

    /// Arguments passed to [`ClipboardProvider::program`]
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            Self::Tmux => &["load-buffer", "-w", "-"],
            Self::Xclip => &["-selection", "clipboard", "-in"],
            Self::Xsel => &["-b", "-i"],
            _ => &[],
        }
    }

    /// Providers usable on this system, in order of preference
    pub fn detect() -> Vec<Self> {
        let mut providers = Vec::with_capacity(3);

        // A running tmux session wins, it works over ssh
        if env::var_os("TMUX").is_some() && command_exists("tmux") {
            providers.push(Self::Tmux);
        }

        let candidates: &[Self] = match platform() {
            Platform::MacOS => &[Self::MacOS],
            Platform::Windows => &[Self::Windows],
            Platform::Linux => &[Self::Wayland, Self::Xsel, Self::Xclip],
            Platform::Android => &[Self::Termux],
            Platform::Unknown => &[],
        };

        providers.extend(
            candidates
                .iter()
                .copied()
                .filter(|provider| provider.is_available()),
        );
        providers
    }

    fn is_available(&self) -> bool {
        let cmd = self.program();
        match self {
            Self::Wayland => env::var_os("WAYLAND_DISPLAY").is_some() && command_exists(cmd),
            Self::Xclip | Self::Xsel => env::var_os("DISPLAY").is_some() && command_exists(cmd),
            _ => command_exists(cmd),
        }
    }
}

impl Clipboard for ClipboardProvider {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        execute_clipboard_command(self.program(), self.args(), text)
    }
}

/// Check if a command exists in one of the `PATH` directories
pub fn command_exists(command: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };

    env::split_paths(&paths).any(|dir| dir.join(command).is_file())
}

/// Spawn `cmd`, write `text` to its stdin and wait for it to exit
fn execute_clipboard_command(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::CommandFailed(format!("Failed to spawn {}: {}", cmd, e)))?;

    // Dropping stdin closes it so the command sees end of input
    let mut stdin = child.stdin.take().ok_or_else(|| {
        ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd))
    })?;
    stdin.write_all(text.as_bytes())?;
    drop(stdin);

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Platform {
    MacOS,
    Windows,
    Linux,
    Android,
    Unknown,
}

fn platform() -> Platform {
    if cfg!(target_os = "macos") {
        Platform::MacOS
    } else if cfg!(target_os = "windows") {
        Platform::Windows
    } else if cfg!(target_os = "android") {
        Platform::Android
    } else if cfg!(target_os = "linux") {
        if env::var_os("WSL_DISTRO_NAME").is_some() {
            Platform::Windows
        } else {
            Platform::Linux
        }
    } else {
        Platform::Unknown
    }
}
