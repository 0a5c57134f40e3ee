//! End-to-end: fake Beat over HTTP -> exporter router -> reqwest scrape.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::routing::get;
use serde_json::json;

use beatex_exporter::app_state::AppState;
use beatex_exporter::client::{BeatClient, HttpBeatClient};
use beatex_exporter::config::ExporterConfig;
use beatex_exporter::registry::SourceRegistry;
use beatex_exporter::router::build_router;

use common::{closed_addr, identity_router, spawn, spawn_fake_beat};

fn config(sources: Vec<String>, filters: Vec<String>) -> ExporterConfig {
    let mut cfg = ExporterConfig::default();
    cfg.sources = sources;
    cfg.filters = filters;
    cfg.exporter.fetch_timeout_ms = 2000;
    cfg
}

async fn serve_exporter(state: AppState) -> String {
    let addr = spawn(build_router(state)).await;
    format!("http://{addr}")
}

#[tokio::test]
async fn scrape_single_beat() {
    let beat = spawn_fake_beat("filebeat", "8.0.0", json!({"uptime": {"ms": 4500}})).await;
    let state = AppState::bootstrap(config(vec![format!("http://{beat}")], vec![]))
        .await
        .unwrap();
    let base = serve_exporter(state).await;

    let resp = reqwest::get(format!("{base}/metrics")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.headers()["content-type"].to_str().unwrap().starts_with("text/plain"));
    assert_eq!(
        resp.text().await.unwrap(),
        "filebeat_info{version=\"8.0.0\"} 1\nfilebeat_uptime_ms 4500"
    );
}

#[tokio::test]
async fn scrape_two_beats_with_filter() {
    let a = spawn_fake_beat("filebeat", "8.0.0", json!({"uptime": {"ms": 1}, "cpu": 2})).await;
    let b = spawn_fake_beat("metricbeat", "8.0.0", json!({"uptime": {"ms": 3}, "mem": 4})).await;
    let state = AppState::bootstrap(config(
        vec![format!("http://{a}"), format!("http://{b}")],
        vec!["uptime".into()],
    ))
    .await
    .unwrap();
    let base = serve_exporter(state).await;

    let body = reqwest::get(format!("{base}/metrics")).await.unwrap().text().await.unwrap();
    assert_eq!(body, "filebeat_uptime_ms 1\nmetricbeat_uptime_ms 3");
}

#[tokio::test]
async fn refused_stats_connection_is_a_500() {
    // Identity is pre-resolved so the only network call is the stats fetch.
    let dead = closed_addr().await;
    let address = format!("http://{dead}");
    let registry = SourceRegistry::from_resolved(vec![beatex_exporter::registry::Source {
        address: address.clone(),
        identity: beatex_core::Identity::new("filebeat", "8.0.0"),
    }]);
    let client: Arc<dyn BeatClient> =
        Arc::new(HttpBeatClient::new(Duration::from_secs(2)).unwrap());
    let state = AppState::new(config(vec![address.clone()], vec![]), registry, client);
    let base = serve_exporter(state).await;

    let resp = reqwest::get(format!("{base}/metrics")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body = resp.text().await.unwrap();
    assert!(body.contains(&address), "{body}");
    assert!(body.to_lowercase().contains("refused"), "{body}");
}

#[tokio::test]
async fn bootstrap_fails_when_beat_is_down() {
    let dead = closed_addr().await;
    let res = AppState::bootstrap(config(vec![format!("http://{dead}")], vec![])).await;
    let err = res.err().expect("must fail");
    assert_eq!(err.code().as_str(), "FETCH");
}

#[tokio::test]
async fn non_json_stats_is_a_500() {
    let app = identity_router("filebeat", "8.0.0").route("/stats", get(|| async { "not json" }));
    let beat = spawn(app).await;
    let state = AppState::bootstrap(config(vec![format!("http://{beat}")], vec![]))
        .await
        .unwrap();
    let base = serve_exporter(state).await;

    let resp = reqwest::get(format!("{base}/metrics")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn healthz_is_ok() {
    let beat = spawn_fake_beat("filebeat", "8.0.0", json!({})).await;
    let state = AppState::bootstrap(config(vec![format!("http://{beat}")], vec![]))
        .await
        .unwrap();
    let base = serve_exporter(state).await;

    let resp = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn hung_stats_endpoint_times_out_as_a_500() {
    let app = identity_router("filebeat", "8.0.0").route(
        "/stats",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(30)).await;
            "{}"
        }),
    );
    let beat = spawn(app).await;
    let mut cfg = config(vec![format!("http://{beat}")], vec![]);
    cfg.exporter.fetch_timeout_ms = 300;
    let state = AppState::bootstrap(cfg).await.unwrap();
    let base = serve_exporter(state).await;

    let started = Instant::now();
    let resp = reqwest::get(format!("{base}/metrics")).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(resp.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    let body = resp.text().await.unwrap();
    assert!(body.contains("timed out"), "{body}");
    assert!(elapsed < Duration::from_secs(5), "scrape took {elapsed:?}");
}
