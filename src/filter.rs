/*!
 * Name based filtering for files and directories
 */

use glob_match::glob_match;

/// Built-in directory names that are never entered
pub const EXCLUDED_DIRS: &[&str] = &[".git"];

/// Built-in file names that are never included
pub const EXCLUDED_FILES: &[&str] = &[".gitignore"];

/// A set of substring patterns matched against a single path component.
///
/// Each value is matched as the glob `*value*`, so plain values behave as
/// substrings while `*`, `?` and `[...]` keep their glob meaning. A `\` in a
/// value is literal.
#[derive(Debug, Clone, Default)]
pub struct NamePatterns {
    globs: Vec<String>,
}

impl NamePatterns {
    /// Build from raw values as given on the command line
    pub fn new<S: AsRef<str>>(values: &[S]) -> Self {
        let globs = values
            .iter()
            .map(|value| format!("*{}*", value.as_ref().replace('\\', "\\\\")))
            .collect();
        Self { globs }
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    /// True if any pattern matches `name`
    pub fn matches(&self, name: &str) -> bool {
        self.globs.iter().any(|glob| glob_match(glob, name))
    }
}

/// File extensions accepted by the walker (empty accepts everything)
#[derive(Debug, Clone, Default)]
pub struct Extensions {
    suffixes: Vec<String>,
}

impl Extensions {
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        let suffixes = extensions
            .iter()
            .map(|ext| ext.as_ref().trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{}", ext))
            .collect();
        Self { suffixes }
    }

    /// True if the set is empty or `name` ends in one of the extensions
    pub fn accepts(&self, name: &str) -> bool {
        self.suffixes.is_empty() || self.suffixes.iter().any(|suffix| name.ends_with(suffix))
    }
}

/// File and directory name rules applied during a walk
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    extensions: Extensions,
    includes: NamePatterns,
    excludes: NamePatterns,
    skips: NamePatterns,
}

impl NameFilter {
    pub fn new(
        extensions: Extensions,
        includes: NamePatterns,
        excludes: NamePatterns,
        skips: NamePatterns,
    ) -> Self {
        Self {
            extensions,
            includes,
            excludes,
            skips,
        }
    }

    /// Check if a directory with this name should be skipped entirely
    pub fn skips_dir(&self, name: &str) -> bool {
        EXCLUDED_DIRS.contains(&name) || self.skips.matches(name)
    }

    /// Check if a file with this name passes every name rule
    pub fn accepts_file(&self, name: &str) -> bool {
        if EXCLUDED_FILES.contains(&name) {
            return false;
        }

        if !self.extensions.accepts(name) {
            return false;
        }

        // Exclusion wins over inclusion
        if self.excludes.matches(name) {
            return false;
        }

        self.includes.is_empty() || self.includes.matches(name)
    }
}
