//! Platform error code to failure context table.
//!
//! The classifier only knows the five named contexts. Which raw platform codes
//! mean which context belongs to whoever integrates a given platform, so the
//! table ships empty and is filled from the `[contexts]` config section.

use std::collections::BTreeMap;

use biometric_types::{ErrorContext, PlatformSignal, SignalKind};

use crate::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextTable {
    by_code: BTreeMap<String, ErrorContext>,
}

impl ContextTable {
    /// Build a table from raw `code -> tag` pairs.
    ///
    /// Tags fold the same way as [`ErrorContext::parse`], but a tag that is
    /// not a known context is an error here: a typo in config should not
    /// quietly become `other`.
    pub fn from_raw<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConfigError> {
        let mut by_code = BTreeMap::new();
        for (code, tag) in entries {
            let Some(context) = ErrorContext::try_parse(tag) else {
                return Err(ConfigError::UnknownContext {
                    code: code.to_owned(),
                    tag: tag.to_owned(),
                });
            };
            by_code.insert(code.to_owned(), context);
        }
        Ok(Self { by_code })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<ErrorContext> {
        self.by_code.get(code).copied()
    }

    /// Fill in the context of a failure signal that arrived without one.
    ///
    /// Success signals and signals that already carry a context pass through
    /// unchanged.
    #[must_use]
    pub fn apply(&self, signal: PlatformSignal) -> PlatformSignal {
        if signal.kind() == SignalKind::Success || signal.context().is_some() {
            return signal;
        }
        let Some(context) = signal.error_code().and_then(|code| self.lookup(code)) else {
            return signal;
        };
        tracing::debug!(
            code = signal.error_code().unwrap_or_default(),
            %context,
            "Context resolved from table"
        );
        signal.with_context(context)
    }
}
