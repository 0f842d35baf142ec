//! Outcome taxonomy for a single biometric authentication attempt.
//!
//! This crate contains pure domain types with no IO, no async, and no state.
//! A platform prompt ends with one [`PlatformSignal`]; [`classify`] turns it
//! into exactly one [`BiometricOutcome`], which the application then matches on.

mod classifier;
mod outcome;
mod signal;

pub use classifier::classify;
pub use outcome::{BiometricOutcome, ErrorCode, OutcomeKind};
pub use signal::{ErrorContext, PlatformSignal, SignalDecodeError, SignalKind};
