/*!
 * Directory and file scanning functionality
 */

use std::collections::HashSet;
use std::fs;
use std::iter;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::PrompterError;
use crate::filter::{Extensions, NameFilter, NamePatterns};
use crate::gitignore::{GitignoreRules, IgnoreRules};
use crate::types::FileEntry;

/// Scanner for the files that make up a prompt
pub struct Scanner {
    /// Roots to traverse, in order
    roots: Vec<PathBuf>,
    /// Name based rules
    filter: NameFilter,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: &Config) -> Self {
        let filter = NameFilter::new(
            Extensions::new(&config.extensions),
            NamePatterns::new(&config.filters),
            NamePatterns::new(&config.excludes),
            NamePatterns::new(&config.skips),
        );

        Self {
            roots: config.paths.clone(),
            filter,
        }
    }

    /// Lazily yield every accepted file under all roots, in traversal order.
    ///
    /// A file reached through more than one root is yielded once.
    pub fn scan(&self) -> impl Iterator<Item = FileEntry> + '_ {
        let mut seen = HashSet::new();

        self.roots
            .iter()
            .flat_map(move |root| self.scan_root(root))
            .filter(move |entry| {
                if seen.insert(entry.path.clone()) {
                    true
                } else {
                    warn!("Duplicate in your parameters: {}", entry.path.display());
                    false
                }
            })
    }

    /// Yield the accepted files of a single root argument
    fn scan_root<'a>(&'a self, root: &'a Path) -> Box<dyn Iterator<Item = FileEntry> + 'a> {
        let abs_root = match fs::canonicalize(root) {
            Ok(path) => path,
            Err(err) => {
                warn!(
                    "'{}' is neither a valid file nor a directory. It is skipped. ({})",
                    root.display(),
                    err
                );
                return Box::new(iter::empty());
            }
        };

        if abs_root.is_dir() {
            debug!("Scanning directory {}", abs_root.display());
            let rules = GitignoreRules::load(&abs_root);
            return Box::new(RootWalk::new(self, abs_root, rules));
        }

        if abs_root.is_file() {
            let parent = abs_root.parent().unwrap_or(Path::new("/"));
            let rules = GitignoreRules::load(parent);
            let relative = root.strip_prefix(".").unwrap_or(root).to_path_buf();
            return Box::new(self.accept_file(abs_root, relative, &rules).into_iter());
        }

        warn!(
            "'{}' is neither a valid file nor a directory. It is skipped.",
            root.display()
        );
        Box::new(iter::empty())
    }

    /// Apply the file rules: built-in exclusions, ignore rules, extension,
    /// exclude and include filters.
    ///
    /// Skip patterns only prune directories below a root, so they are not
    /// checked here.
    fn accept_file(
        &self,
        path: PathBuf,
        relative: PathBuf,
        rules: &dyn IgnoreRules,
    ) -> Option<FileEntry> {
        let name = path.file_name()?.to_string_lossy().into_owned();

        if rules.is_ignored(&path, false) {
            debug!("Skipping {}: ignored", relative.display());
            return None;
        }

        if !self.filter.accepts_file(&name) {
            debug!("Skipping {}: filtered out", relative.display());
            return None;
        }

        Some(FileEntry { path, relative })
    }
}

/// Recursive walk of one directory root in lexical order
struct RootWalk<'a> {
    scanner: &'a Scanner,
    root: PathBuf,
    rules: GitignoreRules,
    entries: walkdir::IntoIter,
}

impl<'a> RootWalk<'a> {
    fn new(scanner: &'a Scanner, root: PathBuf, rules: GitignoreRules) -> Self {
        let entries = WalkDir::new(&root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Self {
            scanner,
            root,
            rules,
            entries,
        }
    }
}

impl Iterator for RootWalk<'_> {
    type Item = FileEntry;

    fn next(&mut self) -> Option<FileEntry> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("{}", PrompterError::from(err));
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let path = entry.path();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                let name = entry.file_name().to_string_lossy();
                if self.scanner.filter.skips_dir(&name) || self.rules.is_ignored(path, true) {
                    debug!("Skipping directory {}", path.display());
                    self.entries.skip_current_dir();
                }
                continue;
            }

            // Symlinked files are read through, symlinked directories are not followed
            if file_type.is_symlink() && !path.is_file() {
                debug!("Not following symlink {}", path.display());
                continue;
            }

            if !file_type.is_file() && !file_type.is_symlink() {
                continue;
            }

            let relative = match path.strip_prefix(&self.root) {
                Ok(relative) => relative.to_path_buf(),
                Err(_) => continue,
            };

            if let Some(file) = self
                .scanner
                .accept_file(path.to_path_buf(), relative, &self.rules)
            {
                return Some(file);
            }
        }
    }
}
