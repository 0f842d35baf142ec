//! The closed set of outcomes for one biometric attempt.
//!
//! Every attempt ends in exactly one [`BiometricOutcome`]. The enum is
//! deliberately exhaustive for downstream crates: a new variant breaks every
//! consumer `match` at compile time instead of slipping into a catch-all arm.
//!
//! A consumer that forgets a variant does not compile:
//!
//! ```compile_fail
//! use biometric_types::BiometricOutcome;
//!
//! fn react(outcome: &BiometricOutcome) -> &'static str {
//!     match outcome {
//!         BiometricOutcome::AuthenticationSucceeded => "proceed",
//!         BiometricOutcome::AuthenticationFailed => "retry",
//!         BiometricOutcome::AuthenticationError { .. } => "abort",
//!     }
//! }
//! ```
//!
//! There are no `is_*` shortcuts either; branch on the variant:
//!
//! ```compile_fail
//! use biometric_types::BiometricOutcome;
//!
//! let _ = BiometricOutcome::AuthenticationSucceeded.is_success();
//! ```
//!
//! ```
//! use biometric_types::BiometricOutcome;
//!
//! fn react(outcome: &BiometricOutcome) -> &'static str {
//!     match outcome {
//!         BiometricOutcome::AuthenticationSucceeded => "proceed",
//!         BiometricOutcome::AuthenticationFailed => "retry",
//!         BiometricOutcome::HardwareUnavailable
//!         | BiometricOutcome::FeatureUnavailable
//!         | BiometricOutcome::AuthenticationNotSet => "passcode",
//!         BiometricOutcome::AuthenticationError { .. } => "abort",
//!     }
//! }
//!
//! assert_eq!(react(&BiometricOutcome::AuthenticationNotSet), "passcode");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque platform error code carried by [`BiometricOutcome::AuthenticationError`].
///
/// The value is kept exactly as the platform reported it. Nothing here trims,
/// parses, or buckets it; callers that need finer handling work from the
/// platform's own code documentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(String);

impl ErrorCode {
    /// The code used when the platform failed without reporting one.
    #[must_use]
    pub const fn unspecified() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ErrorCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ErrorCode {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unspecified() {
            f.write_str("<unspecified>")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Terminal result of a single biometric authentication attempt.
///
/// Values are immutable and compared by value. Produce them with
/// [`classify`](crate::classify); consume them with an exhaustive `match`.
///
/// # Serde
///
/// Internally tagged on `outcome` with snake_case tags:
///
/// ```text
/// {"outcome":"authentication_succeeded"}
/// {"outcome":"authentication_error","error_code":"7"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum BiometricOutcome {
    /// Hardware exists but cannot be used right now (busy, damaged, powered off).
    HardwareUnavailable,
    /// No biometric hardware, or the OS does not support the feature.
    FeatureUnavailable,
    /// Hardware is usable but no biometric credential is enrolled.
    AuthenticationNotSet,
    /// A sample was captured and compared but did not match. The user may retry.
    AuthenticationFailed,
    /// The sample matched an enrolled credential.
    AuthenticationSucceeded,
    /// Any other platform failure (cancellation, timeout, lockout, system error).
    AuthenticationError { error_code: ErrorCode },
}

impl BiometricOutcome {
    #[must_use]
    pub fn error(code: impl Into<ErrorCode>) -> Self {
        Self::AuthenticationError {
            error_code: code.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::HardwareUnavailable => OutcomeKind::HardwareUnavailable,
            Self::FeatureUnavailable => OutcomeKind::FeatureUnavailable,
            Self::AuthenticationNotSet => OutcomeKind::AuthenticationNotSet,
            Self::AuthenticationFailed => OutcomeKind::AuthenticationFailed,
            Self::AuthenticationSucceeded => OutcomeKind::AuthenticationSucceeded,
            Self::AuthenticationError { .. } => OutcomeKind::AuthenticationError,
        }
    }
}

impl fmt::Display for BiometricOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HardwareUnavailable => f.write_str("biometric hardware unavailable"),
            Self::FeatureUnavailable => f.write_str("biometric feature unavailable"),
            Self::AuthenticationNotSet => f.write_str("no biometric credential enrolled"),
            Self::AuthenticationFailed => f.write_str("biometric not recognized"),
            Self::AuthenticationSucceeded => f.write_str("authentication succeeded"),
            Self::AuthenticationError { error_code } => {
                write!(f, "authentication error (code {error_code})")
            }
        }
    }
}

/// Payload-free mirror of [`BiometricOutcome`], for tallies and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    HardwareUnavailable,
    FeatureUnavailable,
    AuthenticationNotSet,
    AuthenticationFailed,
    AuthenticationSucceeded,
    AuthenticationError,
}

impl OutcomeKind {
    /// Every kind, in declaration order.
    pub const ALL: [OutcomeKind; 6] = [
        OutcomeKind::HardwareUnavailable,
        OutcomeKind::FeatureUnavailable,
        OutcomeKind::AuthenticationNotSet,
        OutcomeKind::AuthenticationFailed,
        OutcomeKind::AuthenticationSucceeded,
        OutcomeKind::AuthenticationError,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HardwareUnavailable => "hardware_unavailable",
            Self::FeatureUnavailable => "feature_unavailable",
            Self::AuthenticationNotSet => "authentication_not_set",
            Self::AuthenticationFailed => "authentication_failed",
            Self::AuthenticationSucceeded => "authentication_succeeded",
            Self::AuthenticationError => "authentication_error",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
