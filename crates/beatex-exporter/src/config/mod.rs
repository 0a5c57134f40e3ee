//! Exporter config loader (strict parsing).

pub mod cli;
pub mod schema;

use std::fs;
use std::path::Path;

use beatex_core::error::{BeatexError, Result};

pub use cli::Args;
pub use schema::{ExporterConfig, ExporterSection, LogLevel, DEFAULT_SOURCE};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let mut cfg = parse_file(path)?;
    cfg.fill_defaults();
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let mut cfg = parse_str(s)?;
    cfg.fill_defaults();
    cfg.validate()?;
    Ok(cfg)
}

fn parse_file(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        BeatexError::Config(format!("read config failed ({}): {e}", path.display()))
    })?;
    parse_str(&s)
}

fn parse_str(s: &str) -> Result<ExporterConfig> {
    serde_yaml::from_str(s).map_err(|e| BeatexError::Config(format!("invalid yaml: {e}")))
}
