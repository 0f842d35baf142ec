//! The `classify` loop: JSONL signals in, one outcome record per line out.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use biometric_config::ContextTable;
use biometric_types::{BiometricOutcome, OutcomeKind, PlatformSignal, classify};
use serde::Serialize;

use crate::action::Action;
use crate::args::Format;
use crate::exit::RunStatus;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub classified: usize,
    pub malformed: usize,
    pub counts: BTreeMap<OutcomeKind, usize>,
}

impl Summary {
    pub fn status(&self) -> RunStatus {
        if self.malformed == 0 {
            RunStatus::Clean
        } else {
            RunStatus::Partial
        }
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for kind in OutcomeKind::ALL {
            let count = self.counts.get(&kind).copied().unwrap_or(0);
            writeln!(out, "{kind}\t{count}")?;
        }
        writeln!(out, "malformed\t{}", self.malformed)
    }
}

#[derive(Serialize)]
struct OutcomeRecord<'a> {
    line: usize,
    outcome: OutcomeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<&'a str>,
    action: Action,
}

impl<'a> OutcomeRecord<'a> {
    fn new(line: usize, outcome: &'a BiometricOutcome) -> Self {
        let error_code = match outcome {
            BiometricOutcome::AuthenticationError { error_code } => Some(error_code.as_str()),
            BiometricOutcome::HardwareUnavailable
            | BiometricOutcome::FeatureUnavailable
            | BiometricOutcome::AuthenticationNotSet
            | BiometricOutcome::AuthenticationFailed
            | BiometricOutcome::AuthenticationSucceeded => None,
        };
        Self {
            line,
            outcome: outcome.kind(),
            error_code,
            action: Action::for_outcome(outcome),
        }
    }
}

/// Classify every line of `reader`, writing results to `out`.
///
/// Malformed lines are logged and counted, never fatal. Only read and write
/// failures abort the run.
pub fn classify_stream(
    reader: impl BufRead,
    out: &mut impl Write,
    table: &ContextTable,
    format: Format,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read input line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let signal = match PlatformSignal::from_json(&line) {
            Ok(signal) => signal,
            Err(err) => {
                tracing::warn!(line = line_no, error = %err, "Skipping malformed signal");
                summary.malformed += 1;
                continue;
            }
        };

        let outcome = classify(table.apply(signal));
        tracing::trace!(line = line_no, %outcome, "Classified");
        write_outcome(out, line_no, &outcome, format)
            .with_context(|| format!("failed to write result for line {line_no}"))?;

        summary.classified += 1;
        *summary.counts.entry(outcome.kind()).or_insert(0) += 1;
    }

    out.flush().context("failed to flush output")?;
    tracing::debug!(
        classified = summary.classified,
        malformed = summary.malformed,
        "Input exhausted"
    );
    Ok(summary)
}

fn write_outcome(
    out: &mut impl Write,
    line: usize,
    outcome: &BiometricOutcome,
    format: Format,
) -> Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer(&mut *out, &OutcomeRecord::new(line, outcome))?;
            writeln!(out)?;
        }
        Format::Text => {
            writeln!(out, "{line}\t{outcome}\t{}", Action::for_outcome(outcome))?;
        }
    }
    Ok(())
}
