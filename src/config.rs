/*!
 * Configuration handling for gpt-prompter
 */

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for gpt-prompter
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "gpt-prompter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate an LLM prompt from the files of a codebase",
    long_about = "Traverses a directory structure and generates a prompt suitable for a language model. \
                  The prompt contains the path and the contents of every file found, and is copied to \
                  the system clipboard together with an estimate of its token count."
)]
pub struct Args {
    /// Directories or files to traverse (defaults to the current directory)
    #[clap(default_value = ".")]
    pub paths: Vec<String>,

    /// Only include files with this extension, e.g. '-e py -e txt'
    #[clap(short = 'e', long = "extension", value_name = "EXTENSION")]
    pub extensions: Vec<String>,

    /// Only include file names containing this pattern, e.g. '-f test'
    #[clap(short = 'f', long = "filter", value_name = "FILTER")]
    pub filters: Vec<String>,

    /// Exclude file names containing this pattern, e.g. '-x test'
    #[clap(short = 'x', long = "exclude", value_name = "EXCLUDE")]
    pub excludes: Vec<String>,

    /// Only print the files that would be included, do not copy the prompt
    #[clap(short = 'd', long)]
    pub dry_run: bool,

    /// Skip directories whose name contains this pattern, e.g. '-s node_modules'
    #[clap(short = 's', long = "skip", value_name = "SKIP")]
    pub skips: Vec<String>,

    /// Ask the model to only acknowledge the codebase instead of explaining it
    #[clap(short = 'q', long)]
    pub quiet: bool,
}

/// Application configuration
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Paths to traverse, in the order given
    pub paths: Vec<PathBuf>,

    /// Extensions to include (if empty, include all)
    pub extensions: Vec<String>,

    /// Substrings a file name must contain (if empty, include all)
    pub filters: Vec<String>,

    /// Substrings that exclude a file name
    pub excludes: Vec<String>,

    /// Substrings that exclude a directory name
    pub skips: Vec<String>,

    /// Skip the clipboard write
    pub dry_run: bool,

    /// Use the quiet preamble
    pub quiet: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let paths = if args.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            args.paths.into_iter().map(PathBuf::from).collect()
        };

        Self {
            paths,
            extensions: args
                .extensions
                .into_iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .filter(|ext| !ext.is_empty())
                .collect(),
            filters: args.filters,
            excludes: args.excludes,
            skips: args.skips,
            dry_run: args.dry_run,
            quiet: args.quiet,
        }
    }

    /// Configuration rooted at a single path with no filters
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            paths: vec![path.into()],
            ..Self::default()
        }
    }
}
