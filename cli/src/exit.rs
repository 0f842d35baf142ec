use std::process::ExitCode;

/// Run result determining the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every non-blank line decoded (exit 0).
    Clean,
    /// Some lines were malformed and skipped (exit 1).
    Partial,
    /// Unreadable input, bad config, or a write failure (exit 2).
    Fatal,
}

impl RunStatus {
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Clean => 0,
            RunStatus::Partial => 1,
            RunStatus::Fatal => 2,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        ExitCode::from(status.exit_code())
    }
}
