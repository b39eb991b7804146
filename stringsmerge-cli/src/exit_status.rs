use std::process::ExitCode;

/// Process exit status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Output written.
    Success,
    /// Run aborted (missing root in strict mode, parse error, write error, bad config).
    Error,
    /// Output written, but duplicate values were found and `--fail-on-duplicates` was given.
    Duplicates,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
            ExitStatus::Duplicates => ExitCode::from(2),
        }
    }
}
