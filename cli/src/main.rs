//! `biometric` - classify biometric platform signals from the command line.
//!
//! ```text
//! JSONL signal -> ContextTable::apply -> classify -> Action::for_outcome -> JSONL/text record
//! ```
//!
//! Results go to stdout, logs and the optional summary go to stderr.

mod action;
mod args;
mod exit;
mod run;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::{env, process::ExitCode};

use anyhow::{Context, Result};
use biometric_config::BiometricConfig;
use biometric_types::OutcomeKind;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::action::Action;
use crate::args::{Cli, Command, Format};
use crate::exit::RunStatus;

const LOG_ENV: &str = "BIOMETRIC_LOG";

fn init_tracing(config_filter: Option<&str>) {
    let env_filter = env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .or_else(|| config_filter.and_then(|directive| EnvFilter::try_new(directive).ok()))
        .unwrap_or_else(|| EnvFilter::new("warn"));

    // stdout carries results, so logs stay on stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

/// Resolve config before logging exists; warnings are replayed after init.
fn load_config(explicit: Option<&Path>) -> Result<(BiometricConfig, Vec<String>)> {
    if let Some(path) = explicit {
        let config = BiometricConfig::from_path(path)?;
        return Ok((config, Vec::new()));
    }
    match BiometricConfig::load() {
        Ok(Some(config)) => Ok((config, Vec::new())),
        Ok(None) => Ok((BiometricConfig::default(), Vec::new())),
        Err(err) => Ok((
            BiometricConfig::default(),
            vec![format!("{err}; continuing with defaults")],
        )),
    }
}

fn run(command: Command, config: &BiometricConfig) -> Result<RunStatus> {
    match command {
        Command::Classify {
            input,
            format,
            summary,
        } => {
            let format = format.unwrap_or_else(|| Format::from(config.output_format()));
            let stdout = io::stdout();
            let mut out = stdout.lock();

            let result = match input {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("failed to open {}", path.display()))?;
                    tracing::info!(path = %path.display(), ?format, "Classifying signals");
                    run::classify_stream(BufReader::new(file), &mut out, &config.contexts, format)?
                }
                None => {
                    tracing::info!(?format, "Classifying signals from stdin");
                    run::classify_stream(io::stdin().lock(), &mut out, &config.contexts, format)?
                }
            };

            if summary {
                result
                    .write_to(&mut io::stderr().lock())
                    .context("failed to write summary")?;
            }
            Ok(result.status())
        }
        Command::Kinds => {
            for kind in OutcomeKind::ALL {
                println!("{kind}\t{}", Action::for_kind(kind));
            }
            Ok(RunStatus::Clean)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, warnings) = match load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("biometric: {err:#}");
            return RunStatus::Fatal.into();
        }
    };

    init_tracing(config.log_filter());
    for warning in warnings {
        tracing::warn!("{warning}");
    }

    match run(cli.command, &config) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("biometric: {err:#}");
            RunStatus::Fatal.into()
        }
    }
}
