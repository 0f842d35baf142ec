use std::path::PathBuf;

use biometric_config::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "biometric", version, about = "Classify biometric platform signals")]
pub struct Cli {
    /// Config file (default: $BIOMETRIC_CONFIG or ~/.biometric/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify JSONL platform signals, one outcome per line
    Classify {
        /// JSONL signal file (default: stdin)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output format (default: from config, else json)
        #[arg(long, value_enum)]
        format: Option<Format>,

        /// Print per-outcome counts to stderr when done
        #[arg(long)]
        summary: bool,
    },
    /// List every outcome tag and the action it implies
    Kinds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Text,
}

impl From<OutputFormat> for Format {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Json => Format::Json,
            OutputFormat::Text => Format::Text,
        }
    }
}
