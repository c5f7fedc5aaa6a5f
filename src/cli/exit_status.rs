use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): Scan completed, no unused selectors
/// - `Failure` (1): Scan completed and reported unused selectors
/// - `Error` (2): Scan could not run (missing directory, unreadable file)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed, no unused selectors.
    Success,
    /// Scan completed and reported unused selectors.
    Failure,
    /// Scan could not run.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
