use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): the command finished; `check` found nothing
/// - `Failure` (1): `check` found consistency violations
/// - `Error` (2): the command failed (unreadable source, bad config, write error)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
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
