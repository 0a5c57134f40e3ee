//! Shared test helpers: an in-memory Beat client and a fake Beat HTTP server.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::{routing::get, Json, Router};

use beatex_core::error::{BeatexError, Result};
use beatex_core::MetricDocument;
use beatex_exporter::client::BeatClient;

/// Answers from a fixed URL -> JSON table; unknown URLs fail like a refused connection.
#[derive(Default)]
pub struct StubClient {
    responses: HashMap<String, std::result::Result<String, String>>,
    calls: Mutex<Vec<String>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(mut self, url: &str, json: &str) -> Self {
        self.responses.insert(url.to_string(), Ok(json.to_string()));
        self
    }

    pub fn fail(mut self, url: &str, msg: &str) -> Self {
        self.responses.insert(url.to_string(), Err(msg.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BeatClient for StubClient {
    async fn get_json(&self, url: &str) -> Result<MetricDocument> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(Ok(json)) => json
                .parse()
                .map_err(|e| BeatexError::fetch(url, format!("invalid json: {e}"))),
            Some(Err(msg)) => Err(BeatexError::fetch(url, msg.clone())),
            None => Err(BeatexError::fetch(url, "Connection refused")),
        }
    }
}

pub fn identity_json(name: &str, version: &str) -> String {
    format!(r#"{{"beat": {{"info": {{"name": "{name}", "version": "{version}"}}}}}}"#)
}

/// Fake Beat answering only the identity document on `/`; callers add `/stats`.
pub fn identity_router(name: &str, version: &str) -> Router {
    let identity: serde_json::Value = serde_json::from_str(&identity_json(name, version)).unwrap();
    Router::new().route("/", get(move || async move { Json(identity) }))
}

/// Serve a fake Beat: `/` returns the identity document, `/stats` returns `stats`.
pub async fn spawn_fake_beat(name: &str, version: &str, stats: serde_json::Value) -> SocketAddr {
    let app =
        identity_router(name, version).route("/stats", get(move || async move { Json(stats) }));
    spawn(app).await
}

pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing listens on.
pub async fn closed_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
