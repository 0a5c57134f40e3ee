//! Source registry: configured Beats and their identities.
//!
//! Identities are resolved once before the server starts and never change, so
//! the registry is a plain immutable list shared behind an `Arc`.

use beatex_core::error::Result;
use beatex_core::{Identity, MetricDocument};

use crate::client::BeatClient;

/// One polled Beat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Base address, also the source's stable identifier.
    pub address: String,
    pub identity: Identity,
}

#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    sources: Vec<Source>,
}

impl SourceRegistry {
    /// Resolve every configured address, failing on the first source whose
    /// identity cannot be fetched or parsed. Duplicate addresses are polled once.
    pub async fn resolve(addresses: &[String], client: &dyn BeatClient) -> Result<Self> {
        let mut sources = Vec::with_capacity(addresses.len());
        for address in dedup(addresses) {
            let doc: MetricDocument = client.get_json(&address).await?;
            let identity = Identity::from_document(&doc).map_err(|e| {
                tracing::error!(source = %address, error = %e, "invalid identity response");
                e
            })?;
            tracing::info!(
                source = %address,
                name = %identity.name,
                version = %identity.version,
                "source registered"
            );
            sources.push(Source { address, identity });
        }
        Ok(Self { sources })
    }

    /// Build from already-resolved sources (duplicates by address are dropped).
    pub fn from_resolved(sources: Vec<Source>) -> Self {
        let mut out: Vec<Source> = Vec::with_capacity(sources.len());
        for s in sources {
            if !out.iter().any(|o| o.address == s.address) {
                out.push(s);
            }
        }
        Self { sources: out }
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Normalize (trailing `/`) and dedup addresses, keeping first-seen order.
fn dedup(addresses: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(addresses.len());
    for a in addresses {
        let a = a.trim_end_matches('/').to_string();
        if !out.contains(&a) {
            out.push(a);
        }
    }
    out
}
