//! End-to-end scan: collect files, extract selectors per kind, reconcile.
//!
//! Markup and stylesheets are processed as two independent branches on a
//! single-threaded runtime and joined before reconciliation. Either branch
//! failing fails the whole scan.

use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use super::{
    corpus::{SourceKind, load_corpus},
    extract::{SelectorCategory, SelectorSet, extract_selectors},
    file_scanner::scan_files,
    reconcile::{UnusedSelectors, reconcile},
};
use crate::config::Config;

/// Result of a complete scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub unused: UnusedSelectors,
    pub markup_files: usize,
    pub stylesheet_files: usize,
    /// Paths the directory walk could not access.
    pub skipped_count: usize,
}

/// Run a scan to completion on a current-thread runtime.
pub fn run(config: &Config) -> Result<ScanOutcome> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start runtime")?
        .block_on(find_unused_selectors(config))
}

/// Find stylesheet selectors that no markup file references.
///
/// Fails before touching any file when the root directory is missing.
pub async fn find_unused_selectors(config: &Config) -> Result<ScanOutcome> {
    config.validate()?;

    let collect = |kind: SourceKind| {
        scan_files(
            &config.root,
            kind.extensions(),
            &config.excluded_dirs,
            config.verbose,
        )
    };
    let markup_scan = collect(SourceKind::Markup);
    let stylesheet_scan = collect(SourceKind::Stylesheet);

    if config.verbose {
        eprintln!(
            "{} {} markup, {} stylesheet file(s) under {}",
            "scanning:".bold().cyan(),
            markup_scan.files.len(),
            stylesheet_scan.files.len(),
            config.root.display()
        );
    }

    let ((markup, markup_files), (stylesheet, stylesheet_files)) = tokio::try_join!(
        selectors_for(SourceKind::Markup, &markup_scan.files),
        selectors_for(SourceKind::Stylesheet, &stylesheet_scan.files),
    )?;

    if config.verbose {
        for (kind, selectors) in [
            (SourceKind::Markup, &markup),
            (SourceKind::Stylesheet, &stylesheet),
        ] {
            eprintln!(
                "{} {} class(es), {} id(s) in {} files",
                "extracted:".bold().cyan(),
                selectors.len(SelectorCategory::Classes),
                selectors.len(SelectorCategory::Ids),
                kind
            );
        }
    }

    Ok(ScanOutcome {
        unused: reconcile(&stylesheet, &markup),
        markup_files,
        stylesheet_files,
        skipped_count: markup_scan.skipped_count + stylesheet_scan.skipped_count,
    })
}

/// Selectors of one kind together with the number of files read.
async fn selectors_for(kind: SourceKind, files: &[PathBuf]) -> Result<(SelectorSet, usize)> {
    let corpus = load_corpus(kind, files)
        .await
        .with_context(|| format!("Failed to read {} files", kind))?;
    Ok((
        extract_selectors(&corpus.text, kind.rules()),
        corpus.file_count,
    ))
}
