//! JSON-to-metrics flattening.
//!
//! Rules, applied to each entry `k: v` of an object at `prefix`:
//! - string `s`: `prefix{k="s"} 1` (categorical tag)
//! - number/bool `n`: `prefix_k n` (bools are 1/0)
//! - object with more than one entry and no object/string entries (a value
//!   table): one `prefix{k="x"} v` line per entry `x: v`
//! - any other object: recurse with prefix `prefix_k`
//! - null/array: skipped
//!
//! The function is pure; output order follows the document's key order.

use serde_json::Number;

use crate::document::MetricDocument;
use crate::exposition::ExpositionLine;

/// Flatten `doc` into exposition lines rooted at `prefix`.
///
/// A non-object root yields no lines.
pub fn flatten(doc: &MetricDocument, prefix: &str) -> Vec<ExpositionLine> {
    let mut out = Vec::new();
    if let Some(entries) = doc.entries() {
        flatten_into(entries, prefix, &mut out);
    }
    out
}

fn flatten_into(
    entries: &[(String, MetricDocument)],
    prefix: &str,
    out: &mut Vec<ExpositionLine>,
) {
    for (k, v) in entries {
        match v {
            MetricDocument::Object(children) => {
                if is_value_table(children) {
                    for (x, child) in children {
                        match scalar(child) {
                            Some(n) => out.push(ExpositionLine::labelled(prefix, k, x, n)),
                            None => {
                                tracing::debug!(
                                    prefix,
                                    table = %k,
                                    key = %x,
                                    "skipping non-numeric value table entry"
                                )
                            }
                        }
                    }
                } else {
                    flatten_into(children, &format!("{prefix}_{k}"), out);
                }
            }
            MetricDocument::String(s) => {
                out.push(ExpositionLine::labelled(prefix, k, s, Number::from(1u8)))
            }
            MetricDocument::Number(n) => {
                out.push(ExpositionLine::sample(format!("{prefix}_{k}"), n.clone()))
            }
            MetricDocument::Bool(b) => {
                out.push(ExpositionLine::sample(format!("{prefix}_{k}"), bool_value(*b)))
            }
            MetricDocument::Array(_) | MetricDocument::Null => {
                tracing::debug!(prefix, key = %k, "skipping unsupported value");
            }
        }
    }
}

/// A value table has more than one entry and none of them is an object or string.
fn is_value_table(children: &[(String, MetricDocument)]) -> bool {
    children.len() > 1 && !children.iter().any(|(_, v)| v.is_object() || v.is_string())
}

fn scalar(v: &MetricDocument) -> Option<Number> {
    match v {
        MetricDocument::Number(n) => Some(n.clone()),
        MetricDocument::Bool(b) => Some(bool_value(*b)),
        _ => None,
    }
}

fn bool_value(b: bool) -> Number {
    Number::from(u8::from(b))
}
