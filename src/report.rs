//! Report rendering and delivery.
//!
//! Short results are printed to the console; once either category grows past
//! the few-selectors threshold the full list goes to a report file instead.
//! This module only formats and writes; status messages are left to the CLI.

use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};

use crate::core::{SelectorCategory, UnusedSelectors};

/// Where a reconciled result is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportChannel {
    Console,
    File,
}

impl ReportChannel {
    /// `File` when either list is longer than `few_selectors`.
    pub fn choose(unused: &UnusedSelectors, few_selectors: usize) -> Self {
        if unused.classes.len() > few_selectors || unused.ids.len() > few_selectors {
            ReportChannel::File
        } else {
            ReportChannel::Console
        }
    }
}

/// Render the report file contents.
///
/// Each category gets a `## Unused <Class|ID> Selectors - <count> ##` heading
/// followed by one tab-indented entry per selector, sigil included. Sections
/// are separated by a blank line.
pub fn render_report(unused: &UnusedSelectors) -> String {
    SelectorCategory::all()
        .into_iter()
        .map(|category| render_section(category, unused.get(category)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_section(category: SelectorCategory, names: &[String]) -> String {
    let mut section = format!(
        "## Unused {} Selectors - {} ##\n",
        category.label(),
        names.len()
    );
    for name in names {
        section.push_str("\n\t");
        section.push(category.sigil());
        section.push_str(name);
    }
    section
}

/// Write the rendered report to `path` as UTF-8.
pub fn write_report(unused: &UnusedSelectors, path: &Path) -> Result<()> {
    fs::write(path, render_report(unused))
        .with_context(|| format!("Failed to write report: {}", path.display()))
}

/// Print both lists with plain labels, each as its `Debug` representation.
pub fn print_console_to<W: Write>(unused: &UnusedSelectors, writer: &mut W) {
    let _ = writeln!(writer, "\nUnused class selectors:");
    let _ = writeln!(writer, "{:?}", unused.classes);
    let _ = writeln!(writer, "\nUnused ID selectors:");
    let _ = writeln!(writer, "{:?}", unused.ids);
}
