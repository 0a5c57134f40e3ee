//! beatex core: the JSON-to-metrics flattening engine and its primitives.
//!
//! This crate turns a Beat's self-reported statistics document into flat text
//! exposition lines. It carries no transport or runtime dependencies so the
//! flattening rules can be exercised without any I/O.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Statistics payloads
//! are not versioned by the Beats, so unexpected shapes are skipped rather than
//! treated as failures.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod document;
pub mod error;
pub mod exposition;
pub mod filter;
pub mod flatten;
pub mod identity;

/// Shared result type.
pub use error::{BeatexError, ErrorCode, Result};

pub use document::MetricDocument;
pub use exposition::{render_body, ExpositionLine};
pub use filter::LineFilter;
pub use flatten::flatten;
pub use identity::Identity;
