//! Reading source files into a single text corpus per file kind.

use std::path::PathBuf;

use anyhow::{Context, Result};
use futures::future::try_join_all;

use super::extract::{ExtractionRule, MARKUP_RULES, STYLESHEET_RULES};
use crate::config::{MARKUP_EXTENSIONS, STYLESHEET_EXTENSIONS};

/// The two kinds of files a scan reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Markup,
    Stylesheet,
}

impl SourceKind {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            SourceKind::Markup => MARKUP_EXTENSIONS,
            SourceKind::Stylesheet => STYLESHEET_EXTENSIONS,
        }
    }

    /// Extraction table applied to this kind's corpus.
    pub fn rules(self) -> &'static [ExtractionRule] {
        match self {
            SourceKind::Markup => MARKUP_RULES.as_slice(),
            SourceKind::Stylesheet => STYLESHEET_RULES.as_slice(),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Markup => f.write_str("markup"),
            SourceKind::Stylesheet => f.write_str("stylesheet"),
        }
    }
}

/// All files of one kind joined with newlines. Which file a line came from is
/// not tracked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCorpus {
    pub kind: SourceKind,
    pub text: String,
    pub file_count: usize,
}

/// Read every file concurrently and concatenate them in the given order.
///
/// Invalid UTF-8 is decoded lossily. The first failing read aborts the whole
/// corpus; the error names the file.
pub async fn load_corpus(kind: SourceKind, files: &[PathBuf]) -> Result<SourceCorpus> {
    let reads = files.iter().map(|path| async move {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok::<_, anyhow::Error>(String::from_utf8_lossy(&bytes).into_owned())
    });

    let contents = try_join_all(reads).await?;

    Ok(SourceCorpus {
        kind,
        file_count: contents.len(),
        text: contents.join("\n"),
    })
}
