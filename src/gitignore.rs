/*!
 * Version-control ignore rules
 *
 * Answers "is this path ignored" using the `.gitignore` files found between
 * a path and its repository root, nearest file first, followed by the user's
 * global `~/.gitignore`.
 */

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::Match;
use log::{debug, warn};

use crate::error::Result;

/// Name of the per-directory ignore file
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Capability used by the scanner to drop ignored paths
pub trait IgnoreRules {
    /// Check if `path` is ignored. `path` must be absolute.
    fn is_ignored(&self, path: &Path, is_dir: bool) -> bool;
}

/// `.gitignore` rules rooted at a repository (or traversal root)
pub struct GitignoreRules {
    /// Topmost directory whose ignore file is consulted
    boundary: PathBuf,
    /// Rules from the user's global ignore file
    global: Option<Gitignore>,
    /// Per-directory rules, loaded on first use
    local: RefCell<HashMap<PathBuf, Option<Gitignore>>>,
}

impl GitignoreRules {
    /// Load the rules that apply below `root`, an absolute directory
    pub fn load(root: &Path) -> Self {
        let global = dirs::home_dir().map(|home| home.join(IGNORE_FILE_NAME));
        Self::with_global_file(root, global.as_deref())
    }

    /// Same as [`GitignoreRules::load`] with an explicit global ignore file
    pub fn with_global_file(root: &Path, global_file: Option<&Path>) -> Self {
        let boundary = find_repository_root(root).unwrap_or_else(|| root.to_path_buf());
        debug!("Ignore rules bounded at {}", boundary.display());

        let global = global_file
            .filter(|file| file.is_file())
            .and_then(|file| load_lenient(&boundary, file));

        Self {
            boundary,
            global,
            local: RefCell::new(HashMap::new()),
        }
    }

    /// Match `path` against the ignore file in `dir`, loading it if needed
    fn match_in(&self, dir: &Path, path: &Path, is_dir: bool) -> Match<()> {
        let mut local = self.local.borrow_mut();
        let rules = local.entry(dir.to_path_buf()).or_insert_with(|| {
            let file = dir.join(IGNORE_FILE_NAME);
            if file.is_file() {
                load_lenient(dir, &file)
            } else {
                None
            }
        });

        match rules {
            Some(rules) => rules.matched_path_or_any_parents(path, is_dir).map(|_| ()),
            None => Match::None,
        }
    }
}

impl IgnoreRules for GitignoreRules {
    fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        if !path.starts_with(&self.boundary) {
            return false;
        }

        // Nearest ignore file decides first
        for dir in path.ancestors().skip(1) {
            if !dir.starts_with(&self.boundary) {
                break;
            }
            match self.match_in(dir, path, is_dir) {
                Match::Ignore(()) => return true,
                Match::Whitelist(()) => return false,
                Match::None => {}
            }
        }

        match &self.global {
            Some(global) => global.matched_path_or_any_parents(path, is_dir).is_ignore(),
            None => false,
        }
    }
}

/// Find the nearest ancestor of `start` that contains a `.git` entry
pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Parse one ignore file whose patterns are relative to `root`
fn load_ignore_file(root: &Path, file: &Path) -> Result<Gitignore> {
    let mut builder = GitignoreBuilder::new(root);
    if let Some(err) = builder.add(file) {
        // Bad lines are dropped, the rest of the file still applies
        warn!("Malformed ignore rules in {}: {}", file.display(), err);
    }
    Ok(builder.build()?)
}

/// Like [`load_ignore_file`], treating an unusable file as having no rules
fn load_lenient(root: &Path, file: &Path) -> Option<Gitignore> {
    match load_ignore_file(root, file) {
        Ok(rules) if rules.is_empty() => None,
        Ok(rules) => {
            debug!("Loaded {} ignore rules from {}", rules.num_ignores(), file.display());
            Some(rules)
        }
        Err(err) => {
            warn!("Ignoring {}: {}", file.display(), err);
            None
        }
    }
}
