use anyhow::Result;

use super::{exit_status::ExitStatus, report};
use crate::{config::Config, core::pipeline};

/// Scan, deliver the report, and map the outcome to an exit status.
///
/// Errors from the scan (missing root, unreadable files) propagate; a failed
/// report write is printed and does not.
pub fn run(config: &Config) -> Result<ExitStatus> {
    let outcome = pipeline::run(config)?;

    report::print_scan_warning(outcome.skipped_count, config.verbose);
    report::deliver(&outcome.unused, config);

    if outcome.unused.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
