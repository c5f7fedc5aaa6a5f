use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::WalkDir;

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Recursively collect files under `root` whose extension is one of `extensions`.
///
/// Extensions carry their leading dot (`.html`). Directories whose path contains
/// any of the `excluded` fragments are pruned together with their subtree; the
/// fragment is matched against the whole path, not just the directory name.
/// Symlinks are not followed. Files are returned sorted by path.
pub fn scan_files(
    root: &Path,
    extensions: &[&str],
    excluded: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        !(entry.file_type().is_dir() && is_excluded(entry.path(), excluded))
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_excluded(path: &Path, excluded: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    excluded.iter().any(|fragment| path_str.contains(fragment.as_str()))
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => extensions
            .iter()
            .any(|wanted| wanted.strip_prefix('.').unwrap_or(wanted) == ext),
        None => false,
    }
}
