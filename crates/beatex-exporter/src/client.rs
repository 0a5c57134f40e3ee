//! Outbound HTTP to the Beats.
//!
//! The exporter only needs "GET this URL and give me a document". Keeping that
//! behind [`BeatClient`] lets the registry and aggregator run against a stub.

use std::error::Error as StdError;
use std::time::Duration;

use async_trait::async_trait;
use beatex_core::error::{BeatexError, Result};
use beatex_core::MetricDocument;

/// Fetches JSON documents from a Beat's HTTP endpoint.
#[async_trait]
pub trait BeatClient: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<MetricDocument>;
}

/// Address of a Beat's live statistics.
pub fn stats_url(base: &str) -> String {
    format!("{}/stats", base.trim_end_matches('/'))
}

/// `reqwest`-backed client with a bounded per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpBeatClient {
    http: reqwest::Client,
}

impl HttpBeatClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .pool_max_idle_per_host(2)
            .build()
            .map_err(|e| BeatexError::Internal(format!("http client build failed: {e}")))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl BeatClient for HttpBeatClient {
    async fn get_json(&self, url: &str) -> Result<MetricDocument> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| BeatexError::fetch(url, error_chain(&e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BeatexError::fetch(url, format!("unexpected status {status}")));
        }

        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| BeatexError::fetch(url, error_chain(&e)))?;
        Ok(MetricDocument::from(value))
    }
}

/// Render an error with its full source chain; reqwest hides the OS error otherwise.
fn error_chain(e: &(dyn StdError + 'static)) -> String {
    let mut msg = e.to_string();
    let mut cur = e.source();
    while let Some(src) = cur {
        let s = src.to_string();
        if !msg.contains(&s) {
            msg.push_str(": ");
            msg.push_str(&s);
        }
        cur = src.source();
    }
    msg
}
