use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Default directory to scan when none is given.
pub const DEFAULT_ROOT: &str = ".";

/// Default report path for the long-report channel.
pub const DEFAULT_OUTPUT_FILE: &str = "./unused-selectors.txt";

/// Lists longer than this are written to the report file instead of the console.
pub const DEFAULT_FEW_SELECTORS: usize = 5;

/// Path fragments whose subtrees are never scanned.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git"];

pub const MARKUP_EXTENSIONS: &[&str] = &[".html"];

pub const STYLESHEET_EXTENSIONS: &[&str] = &[".css", ".sass", ".scss"];

/// Run configuration.
///
/// Every value the pipeline and the report sink depend on lives here and is
/// passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub output_file: PathBuf,
    pub excluded_dirs: Vec<String>,
    pub few_selectors: usize,
    pub verbose: bool,
}

fn default_excluded_dirs() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            excluded_dirs: default_excluded_dirs(),
            few_selectors: DEFAULT_FEW_SELECTORS,
            verbose: false,
        }
    }
}

impl Config {
    pub fn new(root: impl AsRef<Path>, output_file: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            output_file: output_file.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Validate configuration values.
    ///
    /// Fails when the root directory does not exist, before any file is read.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            bail!("Could not find directory {}", self.root.display());
        }
        if self.excluded_dirs.iter().any(|d| d.is_empty()) {
            bail!("Excluded directory fragments must not be empty");
        }
        Ok(())
    }
}
