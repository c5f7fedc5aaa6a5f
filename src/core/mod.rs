//! Core analysis engine.
//!
//! ## Module Structure
//!
//! - `file_scanner`: Directory traversal
//! - `corpus`: Concurrent file reading into one text blob per kind
//! - `extract`: Rule-driven selector extraction
//! - `reconcile`: Stylesheet-minus-markup set difference
//! - `pipeline`: Wires the above together for a full scan

pub mod corpus;
pub mod extract;
pub mod file_scanner;
pub mod pipeline;
pub mod reconcile;

pub use corpus::{SourceCorpus, SourceKind, load_corpus};
pub use extract::{ExtractionRule, SelectorCategory, SelectorSet, extract_selectors};
pub use pipeline::{ScanOutcome, find_unused_selectors};
pub use reconcile::{UnusedSelectors, difference, reconcile};
