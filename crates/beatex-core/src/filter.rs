//! Substring inclusion filter applied to rendered lines.

/// Keeps lines containing any configured substring (case-sensitive, plain match).
/// An empty filter passes everything through.
#[derive(Debug, Clone, Default)]
pub struct LineFilter {
    substrings: Vec<String>,
}

impl LineFilter {
    /// Build a filter; duplicate substrings are collapsed (first occurrence kept).
    pub fn new<I, S>(substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for s in substrings {
            let s = s.into();
            if !out.contains(&s) {
                out.push(s);
            }
        }
        Self { substrings: out }
    }

    pub fn is_enabled(&self) -> bool {
        !self.substrings.is_empty()
    }

    pub fn substrings(&self) -> &[String] {
        &self.substrings
    }

    pub fn matches(&self, line: &str) -> bool {
        !self.is_enabled() || self.substrings.iter().any(|s| line.contains(s.as_str()))
    }

    /// Filter lines, preserving order. Each input line is kept at most once.
    pub fn apply(&self, lines: Vec<String>) -> Vec<String> {
        if !self.is_enabled() {
            return lines;
        }
        lines.into_iter().filter(|l| self.matches(l)).collect()
    }
}
