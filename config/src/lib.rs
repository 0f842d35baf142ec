//! Configuration for the biometric harness.
//!
//! Read from `~/.biometric/config.toml`, or from the file named by
//! `BIOMETRIC_CONFIG`. Every section is optional.
//!
//! ```toml
//! [output]
//! format = "text"
//!
//! [log]
//! filter = "biometric=debug"
//!
//! [contexts]
//! "1" = "hardware-unavailable"
//! "11" = "no-enrolled-credentials"
//! ```

mod contexts;

pub use contexts::ContextTable;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ENV: &str = "BIOMETRIC_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("unknown context {tag:?} for error code {code:?}")]
    UnknownContext { code: String, tag: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive, used when neither `BIOMETRIC_LOG` nor `RUST_LOG` is set.
    pub filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    output: Option<OutputConfig>,
    log: Option<LogConfig>,
    #[serde(default)]
    contexts: BTreeMap<String, String>,
}

#[derive(Debug, Default)]
pub struct BiometricConfig {
    pub output: OutputConfig,
    pub log: LogConfig,
    pub contexts: ContextTable,
}

impl BiometricConfig {
    /// Load the config file if there is one.
    ///
    /// A missing file is `Ok(None)`. Read and parse failures are returned so
    /// the caller can decide whether to continue with defaults; this usually
    /// runs before logging is initialized.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::from_path(&path).map(Some)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_raw(raw)?;
        tracing::debug!(
            path = %path.display(),
            contexts = config.contexts.len(),
            "Config loaded"
        );
        Ok(config)
    }

    /// Parse config from TOML text. Parse errors are reported against `<inline>`.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let contexts = ContextTable::from_raw(
            raw.contexts
                .iter()
                .map(|(code, tag)| (code.as_str(), tag.as_str())),
        )?;
        Ok(Self {
            output: raw.output.unwrap_or_default(),
            log: raw.log.unwrap_or_default(),
            contexts,
        })
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.log.filter.as_deref()
    }
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => {
                Some(path.as_path())
            }
            ConfigError::UnknownContext { .. } => None,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".biometric").join("config.toml"))
}
