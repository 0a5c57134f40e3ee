//! Shared application state for the exporter.
//!
//! Built once at startup from the validated config and the resolved source
//! registry. Request handlers only read it.

use std::sync::Arc;
use std::time::Duration;

use beatex_core::error::Result;
use beatex_core::LineFilter;

use crate::aggregate::Aggregator;
use crate::client::{BeatClient, HttpBeatClient};
use crate::config::ExporterConfig;
use crate::registry::SourceRegistry;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    registry: Arc<SourceRegistry>,
    aggregator: Aggregator,
}

impl AppState {
    /// Build the HTTP client from config and resolve every source (fail-fast).
    pub async fn bootstrap(cfg: ExporterConfig) -> Result<Self> {
        let client: Arc<dyn BeatClient> = Arc::new(HttpBeatClient::new(Duration::from_millis(
            cfg.exporter.fetch_timeout_ms,
        ))?);
        let registry = SourceRegistry::resolve(&cfg.sources, client.as_ref()).await?;
        Ok(Self::new(cfg, registry, client))
    }

    /// Assemble state from an already-resolved registry.
    pub fn new(cfg: ExporterConfig, registry: SourceRegistry, client: Arc<dyn BeatClient>) -> Self {
        let registry = Arc::new(registry);
        let filter = LineFilter::new(cfg.filters.iter().cloned());
        let aggregator = Aggregator::new(Arc::clone(&registry), filter, client);
        Self {
            inner: Arc::new(AppStateInner { cfg, registry, aggregator }),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &SourceRegistry {
        &self.inner.registry
    }

    pub fn aggregator(&self) -> &Aggregator {
        &self.inner.aggregator
    }
}
