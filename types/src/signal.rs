//! The terminal signal a platform biometric prompt hands back for one attempt.

use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether the platform reported a match or some kind of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Success,
    Failure,
}

/// What the platform said about a failure.
///
/// Parsing is total: any tag that is not one of the four specific contexts is
/// [`ErrorContext::Other`], so new platform tags degrade instead of failing.
/// On the wire this extends to values that are not strings at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireContext", into = "String")]
pub enum ErrorContext {
    HardwareUnavailable,
    NoHardware,
    NoEnrolledCredentials,
    AuthFailed,
    Other,
}

impl ErrorContext {
    /// Parse a context tag.
    ///
    /// Case, `-`, `_` and spaces are ignored, so `no-hardware`, `no_hardware`
    /// and `noHardware` are the same tag.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or(Self::Other)
    }

    /// Strict form of [`ErrorContext::parse`]: `None` unless `raw` spells one
    /// of the five tags, `other` included, under the same folding.
    #[must_use]
    pub fn try_parse(raw: &str) -> Option<Self> {
        let folded: String = raw
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "hardwareunavailable" => Some(Self::HardwareUnavailable),
            "nohardware" => Some(Self::NoHardware),
            "noenrolledcredentials" => Some(Self::NoEnrolledCredentials),
            "authfailed" => Some(Self::AuthFailed),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HardwareUnavailable => "hardware_unavailable",
            Self::NoHardware => "no_hardware",
            Self::NoEnrolledCredentials => "no_enrolled_credentials",
            Self::AuthFailed => "auth_failed",
            Self::Other => "other",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireContext {
    Tag(String),
    Unknown(IgnoredAny),
}

impl From<WireContext> for ErrorContext {
    fn from(value: WireContext) -> Self {
        match value {
            WireContext::Tag(tag) => Self::parse(&tag),
            WireContext::Unknown(_) => Self::Other,
        }
    }
}

impl From<ErrorContext> for String {
    fn from(value: ErrorContext) -> Self {
        value.as_str().to_owned()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One terminal signal from the platform biometric subsystem.
///
/// # Serde
///
/// Uses the platform wire shape rather than the field layout:
///
/// ```text
/// {"success": false, "error_code": "7", "context": "other"}
/// ```
///
/// `errorCode` is accepted as an alias, and numeric codes are kept as their
/// decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireSignal", into = "WireSignal")]
pub struct PlatformSignal {
    kind: SignalKind,
    error_code: Option<String>,
    context: Option<ErrorContext>,
}

impl PlatformSignal {
    #[must_use]
    pub const fn success() -> Self {
        Self {
            kind: SignalKind::Success,
            error_code: None,
            context: None,
        }
    }

    #[must_use]
    pub const fn failure(context: ErrorContext) -> Self {
        Self {
            kind: SignalKind::Failure,
            error_code: None,
            context: Some(context),
        }
    }

    /// A failure the platform gave no context for.
    #[must_use]
    pub const fn unclassified() -> Self {
        Self {
            kind: SignalKind::Failure,
            error_code: None,
            context: None,
        }
    }

    #[must_use]
    pub fn with_error_code(mut self, code: impl Into<String>) -> Self {
        self.error_code = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub const fn kind(&self) -> SignalKind {
        self.kind
    }

    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    #[must_use]
    pub const fn context(&self) -> Option<ErrorContext> {
        self.context
    }

    /// Decode one JSON object in the platform wire shape.
    pub fn from_json(raw: &str) -> Result<Self, SignalDecodeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SignalDecodeError::Empty);
        }
        serde_json::from_str(trimmed).map_err(SignalDecodeError::Json)
    }

    pub(crate) fn into_parts(self) -> (SignalKind, Option<String>, Option<ErrorContext>) {
        (self.kind, self.error_code, self.context)
    }
}

#[derive(Debug, Error)]
pub enum SignalDecodeError {
    #[error("signal is empty")]
    Empty,
    #[error("malformed signal: {0}")]
    Json(#[source] serde_json::Error),
}

#[derive(Serialize, Deserialize)]
struct WireSignal {
    success: bool,
    #[serde(
        default,
        alias = "errorCode",
        skip_serializing_if = "Option::is_none"
    )]
    error_code: Option<WireCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context: Option<ErrorContext>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WireCode {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<WireCode> for String {
    fn from(value: WireCode) -> Self {
        match value {
            WireCode::Text(text) => text,
            WireCode::Signed(n) => n.to_string(),
            WireCode::Unsigned(n) => n.to_string(),
        }
    }
}

impl From<WireSignal> for PlatformSignal {
    fn from(wire: WireSignal) -> Self {
        Self {
            kind: if wire.success {
                SignalKind::Success
            } else {
                SignalKind::Failure
            },
            error_code: wire.error_code.map(String::from),
            context: wire.context,
        }
    }
}

impl From<PlatformSignal> for WireSignal {
    fn from(signal: PlatformSignal) -> Self {
        Self {
            success: signal.kind == SignalKind::Success,
            error_code: signal.error_code.map(WireCode::Text),
            context: signal.context,
        }
    }
}
