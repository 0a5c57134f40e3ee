//! Command-line flags, merged on top of the optional YAML file.

use std::path::PathBuf;

use clap::Parser;
use beatex_core::error::Result;

use super::schema::{ExporterConfig, LogLevel};

#[derive(Debug, Parser)]
#[command(name = "beats-exporter", about = "Prometheus exporter for Elastic Beats", version)]
pub struct Args {
    /// YAML config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Beat port to scrape on localhost (repeatable, default: 5066).
    #[arg(short, long = "port")]
    pub ports: Vec<u16>,

    /// Beat base address to scrape, e.g. http://10.0.0.5:5066 (repeatable).
    #[arg(short, long = "source")]
    pub sources: Vec<String>,

    /// Keep only lines containing one of these substrings (repeatable, default: disabled).
    #[arg(short, long = "filter")]
    pub filters: Vec<String>,

    /// Logging level (default: info).
    #[arg(short, long, value_enum)]
    pub log: Option<LogLevel>,

    /// Expose metrics on this port (default: 8080).
    #[arg(short, long)]
    pub metrics_port: Option<u16>,

    /// Per-request timeout when polling a Beat.
    #[arg(long)]
    pub fetch_timeout_ms: Option<u64>,
}

impl Args {
    /// Load the config file (if any), apply CLI overrides, fill defaults and validate.
    pub fn into_config(self) -> Result<ExporterConfig> {
        let mut cfg = match &self.config {
            Some(path) => super::parse_file(path)?,
            None => ExporterConfig::default(),
        };
        self.apply(&mut cfg);
        cfg.fill_defaults();
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply(&self, cfg: &mut ExporterConfig) {
        cfg.sources
            .extend(self.ports.iter().map(|p| format!("http://localhost:{p}")));
        cfg.sources.extend(self.sources.iter().cloned());
        cfg.filters.extend(self.filters.iter().cloned());

        if let Some(level) = self.log {
            cfg.exporter.log = level;
        }
        if let Some(port) = self.metrics_port {
            let host = cfg
                .exporter
                .listen
                .rsplit_once(':')
                .map(|(h, _)| h.to_string())
                .unwrap_or_else(|| "0.0.0.0".into());
            cfg.exporter.listen = format!("{host}:{port}");
        }
        if let Some(ms) = self.fetch_timeout_ms {
            cfg.exporter.fetch_timeout_ms = ms;
        }
    }
}
