//! Untyped metric document tree.
//!
//! Beats report their statistics as arbitrary JSON. The tree is converted once
//! into [`MetricDocument`] so the flattener can match exhaustively on node kind
//! instead of probing `serde_json::Value` ad hoc.

use serde_json::{Number, Value};

/// One node of a statistics document.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricDocument {
    /// Mapping in source key order.
    Object(Vec<(String, MetricDocument)>),
    String(String),
    /// Kept as parsed so large integers and float text render exactly.
    Number(Number),
    Bool(bool),
    Array(Vec<MetricDocument>),
    Null,
}

impl MetricDocument {
    /// Look up a direct child of an object node.
    pub fn get(&self, key: &str) -> Option<&MetricDocument> {
        match self {
            MetricDocument::Object(entries) => {
                entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
            }
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, MetricDocument::Object(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, MetricDocument::String(_))
    }

    /// Borrow the entries of an object node.
    pub fn entries(&self) -> Option<&[(String, MetricDocument)]> {
        match self {
            MetricDocument::Object(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<Value> for MetricDocument {
    fn from(v: Value) -> Self {
        match v {
            Value::Object(map) => MetricDocument::Object(
                map.into_iter().map(|(k, v)| (k, MetricDocument::from(v))).collect(),
            ),
            Value::String(s) => MetricDocument::String(s),
            Value::Number(n) => MetricDocument::Number(n),
            Value::Bool(b) => MetricDocument::Bool(b),
            Value::Array(items) => {
                MetricDocument::Array(items.into_iter().map(MetricDocument::from).collect())
            }
            Value::Null => MetricDocument::Null,
        }
    }
}

impl std::str::FromStr for MetricDocument {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str::<Value>(s).map(MetricDocument::from)
    }
}
