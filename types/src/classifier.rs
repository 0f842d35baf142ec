//! Platform signal to [`BiometricOutcome`].
//!
//! Classification is total and pure. A success signal always wins; after that
//! a recognized failure context decides the variant even when an error code is
//! also present; everything else falls back to
//! [`BiometricOutcome::AuthenticationError`] with the raw code untouched.

use crate::outcome::{BiometricOutcome, ErrorCode};
use crate::signal::{ErrorContext, PlatformSignal, SignalKind};

/// Map one platform signal onto exactly one outcome.
///
/// ```
/// use biometric_types::{BiometricOutcome, ErrorContext, PlatformSignal, classify};
///
/// let signal = PlatformSignal::failure(ErrorContext::NoHardware).with_error_code("12");
/// assert_eq!(classify(signal), BiometricOutcome::FeatureUnavailable);
/// ```
#[must_use]
pub fn classify(signal: PlatformSignal) -> BiometricOutcome {
    let (kind, error_code, context) = signal.into_parts();
    match (kind, context) {
        (SignalKind::Success, _) => BiometricOutcome::AuthenticationSucceeded,
        (SignalKind::Failure, Some(ErrorContext::HardwareUnavailable)) => {
            BiometricOutcome::HardwareUnavailable
        }
        (SignalKind::Failure, Some(ErrorContext::NoHardware)) => {
            BiometricOutcome::FeatureUnavailable
        }
        (SignalKind::Failure, Some(ErrorContext::NoEnrolledCredentials)) => {
            BiometricOutcome::AuthenticationNotSet
        }
        (SignalKind::Failure, Some(ErrorContext::AuthFailed)) => {
            BiometricOutcome::AuthenticationFailed
        }
        (SignalKind::Failure, Some(ErrorContext::Other) | None) => {
            BiometricOutcome::AuthenticationError {
                error_code: error_code.map_or_else(ErrorCode::unspecified, ErrorCode::from),
            }
        }
    }
}

impl From<PlatformSignal> for BiometricOutcome {
    fn from(signal: PlatformSignal) -> Self {
        classify(signal)
    }
}
