//! Selcheck - unused CSS selector finder
//!
//! Selcheck is a CLI tool and library that scans a project tree for markup
//! (`.html`) and stylesheet (`.css`, `.sass`, `.scss`) files and reports the
//! class and ID selectors that stylesheets declare but no markup references.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Run configuration and defaults
//! - `core`: Core analysis engine (collect, extract, reconcile)
//! - `report`: Report rendering and file output

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
