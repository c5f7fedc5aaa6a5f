//! CLI argument definitions using clap.
//!
//! ```text
//! selcheck [ROOT] [OUTPUT] [--threshold N] [--exclude FRAGMENT]... [-v]
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DEFAULT_FEW_SELECTORS, DEFAULT_OUTPUT_FILE, DEFAULT_ROOT};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to scan for markup and stylesheet files
    #[arg(default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Report file, written only when the results are too long for the console
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Largest number of unused selectors per category printed to the console
    #[arg(long, default_value_t = DEFAULT_FEW_SELECTORS)]
    pub threshold: usize,

    /// Skip directories whose path contains FRAGMENT (default: .git)
    /// Can be specified multiple times: --exclude .git --exclude node_modules
    #[arg(long = "exclude", value_name = "FRAGMENT")]
    pub excluded_dirs: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Build the run configuration. Explicit exclusions replace the defaults.
    pub fn into_config(self) -> Config {
        let defaults = Config::default();
        Config {
            root: self.root,
            output_file: self.output,
            excluded_dirs: if self.excluded_dirs.is_empty() {
                defaults.excluded_dirs
            } else {
                self.excluded_dirs
            },
            few_selectors: self.threshold,
            verbose: self.verbose,
        }
    }
}
