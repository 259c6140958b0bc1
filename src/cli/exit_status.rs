use std::process::ExitCode;

/// Exit status for the CLI.
///
/// - `Success` (0): tokens were extracted and written
/// - `Error` (2): the run failed (invalid path, unreadable file, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Tokens were extracted and the output document was written.
    Success,
    /// The run failed before producing output.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
