//! What the application does next for each outcome.

use std::fmt;

use biometric_types::{BiometricOutcome, OutcomeKind};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Proceed,
    /// Stay in the prompt and let the user try again.
    Retry,
    /// Biometrics cannot be used on this device right now; ask for the passcode.
    UsePasscode,
    Abort,
}

impl Action {
    // No wildcard arms: a new outcome must be handled here explicitly.
    #[must_use]
    pub fn for_outcome(outcome: &BiometricOutcome) -> Self {
        match outcome {
            BiometricOutcome::AuthenticationSucceeded => Action::Proceed,
            BiometricOutcome::AuthenticationFailed => Action::Retry,
            BiometricOutcome::HardwareUnavailable
            | BiometricOutcome::FeatureUnavailable
            | BiometricOutcome::AuthenticationNotSet => Action::UsePasscode,
            BiometricOutcome::AuthenticationError { .. } => Action::Abort,
        }
    }

    #[must_use]
    pub fn for_kind(kind: OutcomeKind) -> Self {
        match kind {
            OutcomeKind::AuthenticationSucceeded => Action::Proceed,
            OutcomeKind::AuthenticationFailed => Action::Retry,
            OutcomeKind::HardwareUnavailable
            | OutcomeKind::FeatureUnavailable
            | OutcomeKind::AuthenticationNotSet => Action::UsePasscode,
            OutcomeKind::AuthenticationError => Action::Abort,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Proceed => "proceed",
            Action::Retry => "retry",
            Action::UsePasscode => "use_passcode",
            Action::Abort => "abort",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
