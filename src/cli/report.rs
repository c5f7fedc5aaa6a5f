//! Console side of the report: channel dispatch and status messages.

use std::io::{self, Write};

use colored::Colorize;

use crate::{
    config::Config,
    core::UnusedSelectors,
    report::{ReportChannel, print_console_to, write_report},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print `unused` to the console or write it to the report file.
pub fn deliver(unused: &UnusedSelectors, config: &Config) {
    match ReportChannel::choose(unused, config.few_selectors) {
        ReportChannel::Console => print_console_to(unused, &mut io::stdout().lock()),
        ReportChannel::File => match write_report(unused, &config.output_file) {
            Ok(()) => print_written_to(
                &config.output_file.display().to_string(),
                &mut io::stdout().lock(),
            ),
            Err(err) => eprintln!("{} {:#}", "error:".bold().red(), err),
        },
    }
}

/// Print the confirmation after a report file was written.
pub fn print_written_to<W: Write>(path: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("File written to {}", path).green()
    );
}

/// Print a warning about paths the directory walk could not access.
pub fn print_scan_warning(count: usize, verbose: bool) {
    print_scan_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a scan warning to a custom writer.
pub fn print_scan_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}
