//! Scrape aggregation across all registered sources.
//!
//! Stats are fetched concurrently, then merged in registry order: identity
//! line first, then the flattened statistics. The first failing source (in
//! registry order) fails the whole scrape; the collector sees an unambiguous
//! failed pull instead of a partial metric set.

use std::sync::Arc;
use std::time::Instant;

use futures_util::future::join_all;

use beatex_core::error::Result;
use beatex_core::{flatten, render_body, ExpositionLine, LineFilter};

use crate::client::{stats_url, BeatClient};
use crate::registry::SourceRegistry;

pub struct Aggregator {
    registry: Arc<SourceRegistry>,
    filter: LineFilter,
    client: Arc<dyn BeatClient>,
}

impl Aggregator {
    pub fn new(
        registry: Arc<SourceRegistry>,
        filter: LineFilter,
        client: Arc<dyn BeatClient>,
    ) -> Self {
        Self { registry, filter, client }
    }

    /// Collect unfiltered lines from every source.
    pub async fn collect(&self) -> Result<Vec<String>> {
        let sources = self.registry.sources();
        let fetches = sources.iter().map(|s| {
            let url = stats_url(&s.address);
            let client = Arc::clone(&self.client);
            async move { client.get_json(&url).await }
        });
        let results = join_all(fetches).await;

        let mut lines = Vec::new();
        for (source, result) in sources.iter().zip(results) {
            let stats = result.map_err(|e| {
                tracing::error!(source = %source.address, error = %e, "scrape failed");
                e
            })?;
            lines.push(ExpositionLine::info(&source.identity).to_string());
            lines.extend(
                flatten(&stats, &source.identity.name)
                    .into_iter()
                    .map(|l| l.to_string()),
            );
        }
        Ok(lines)
    }

    /// Run one scrape and return the response body.
    pub async fn scrape(&self) -> Result<String> {
        let started = Instant::now();
        let lines = self.filter.apply(self.collect().await?);
        tracing::debug!(
            sources = self.registry.len(),
            lines = lines.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scrape complete"
        );
        Ok(render_body(&lines))
    }
}
