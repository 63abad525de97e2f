use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): no hardcoded strings found
/// - `Failure` (1): hardcoded strings found
/// - `Error` (2): internal or configuration error
/// - `Usage` (64): bad invocation, e.g. no files or a directory given
/// - `NoInput` (66): missing input file or unknown reporter
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Scan completed, nothing found.
    Success,
    /// Scan completed and found hardcoded strings.
    Failure,
    /// Scan failed due to an internal error (config error, unreadable file, etc.).
    Error,
    /// The command line was used incorrectly.
    Usage,
    /// An input named on the command line does not exist.
    NoInput,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
            ExitStatus::Usage => ExitCode::from(64),
            ExitStatus::NoInput => ExitCode::from(66),
        }
    }
}
