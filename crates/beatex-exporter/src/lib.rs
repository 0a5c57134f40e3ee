//! beats-exporter library entry.
//!
//! Wires config, the Beat HTTP client, the source registry, and the scrape
//! aggregator into an axum service. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod aggregate;
pub mod app_state;
pub mod client;
pub mod config;
pub mod ops;
pub mod registry;
pub mod router;
