//! Flat text exposition lines.
//!
//! Format: `name value` or `name{key="value",...} value`. The flattener never
//! emits more than one label per line, but rendering accepts any number.

use std::fmt;

use serde_json::Number;

use crate::identity::Identity;

/// Escape a label value so the rendered line stays parseable.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// One generated sample line.
///
/// The value is rendered with `serde_json`'s number formatting: integers
/// exactly as reported, floats in shortest round-trip form (`0.25`, `4500.0`,
/// `1e300`).
#[derive(Debug, Clone, PartialEq)]
pub struct ExpositionLine {
    pub name: String,
    pub labels: Vec<(String, String)>,
    pub value: Number,
}

impl ExpositionLine {
    /// Unlabelled numeric sample.
    pub fn sample(name: impl Into<String>, value: Number) -> Self {
        Self {
            name: name.into(),
            labels: Vec::new(),
            value,
        }
    }

    /// Sample carrying a single label pair.
    pub fn labelled(
        name: impl Into<String>,
        key: impl Into<String>,
        label_value: impl Into<String>,
        value: Number,
    ) -> Self {
        Self {
            name: name.into(),
            labels: vec![(key.into(), label_value.into())],
            value,
        }
    }

    /// Identity line: `{name}_info{version="{version}"} 1`.
    pub fn info(identity: &Identity) -> Self {
        Self::labelled(
            format!("{}_info", identity.name),
            "version",
            identity.version.clone(),
            Number::from(1u8),
        )
    }
}

impl fmt::Display for ExpositionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.labels.is_empty() {
            let label_str = self
                .labels
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            write!(f, "{{{label_str}}}")?;
        }
        write!(f, " {}", self.value)
    }
}

/// Join already-rendered lines into a response body (no trailing newline).
pub fn render_body(lines: &[String]) -> String {
    lines.join("\n")
}
