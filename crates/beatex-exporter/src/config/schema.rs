use std::net::SocketAddr;

use serde::Deserialize;
use beatex_core::error::{BeatexError, Result};

/// Address polled when no source is configured.
pub const DEFAULT_SOURCE: &str = "http://localhost:5066";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub exporter: ExporterSection,

    /// Beat base addresses, e.g. `http://localhost:5066`.
    #[serde(default)]
    pub sources: Vec<String>,

    /// Substring filters; empty disables filtering.
    #[serde(default)]
    pub filters: Vec<String>,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            exporter: ExporterSection::default(),
            sources: Vec::new(),
            filters: Vec::new(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(BeatexError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.exporter.validate()?;

        for s in &self.sources {
            let url = reqwest::Url::parse(s)
                .map_err(|e| BeatexError::Config(format!("invalid source address {s}: {e}")))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(BeatexError::Config(format!(
                    "source address {s} must use http or https"
                )));
            }
        }
        if self.filters.iter().any(|f| f.is_empty()) {
            return Err(BeatexError::Config("filters must not contain empty strings".into()));
        }
        Ok(())
    }

    /// Fall back to the default source when none is configured.
    pub fn fill_defaults(&mut self) {
        if self.sources.is_empty() {
            self.sources.push(DEFAULT_SOURCE.to_string());
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default)]
    pub log: LogLevel,

    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

impl Default for ExporterSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            log: LogLevel::default(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
        }
    }
}

impl ExporterSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !(100..=60000).contains(&self.fetch_timeout_ms) {
            return Err(BeatexError::Config(
                "exporter.fetch_timeout_ms must be between 100 and 60000".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            BeatexError::Config(format!("exporter.listen must be a valid SocketAddr: {e}"))
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_fetch_timeout_ms() -> u64 {
    5000
}
