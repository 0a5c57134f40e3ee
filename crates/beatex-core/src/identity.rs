//! Beat identity (`beat.info.name` / `beat.info.version`).

use crate::document::MetricDocument;
use crate::error::{BeatexError, Result};

/// Name and version a Beat reports about itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Beat name (e.g. `filebeat`); also the metric name prefix.
    pub name: String,
    pub version: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Resolve identity from a document shaped `{"beat": {"info": {"name", "version"}}}`.
    pub fn from_document(doc: &MetricDocument) -> Result<Self> {
        let beat = doc.get("beat").ok_or_else(|| missing("beat"))?;
        let info = beat.get("info").ok_or_else(|| missing("info"))?;

        let name = match info.get("name") {
            Some(MetricDocument::String(s)) => s.clone(),
            Some(_) => {
                return Err(BeatexError::Identity(
                    "invalid response, name is not a string".into(),
                ))
            }
            None => return Err(missing("name")),
        };
        let version = match info.get("version") {
            Some(MetricDocument::String(s)) => s.clone(),
            Some(MetricDocument::Number(n)) => n.to_string(),
            Some(_) => {
                return Err(BeatexError::Identity(
                    "invalid response, version is not a string".into(),
                ))
            }
            None => return Err(missing("version")),
        };

        if name.is_empty() {
            return Err(BeatexError::Identity("invalid response, name is empty".into()));
        }
        Ok(Self { name, version })
    }
}

fn missing(key: &str) -> BeatexError {
    BeatexError::Identity(format!("invalid response, {key} key not found"))
}
