//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/metrics` : flattened Beat statistics, 500 when any source fails

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;

const CONTENT_TYPE_TEXT: &str = "text/plain; version=0.0.4; charset=utf-8";

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(State(state): State<AppState>) -> Response {
    match state.aggregator().scrape().await {
        Ok(body) => {
            (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)], body).into_response()
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, CONTENT_TYPE_TEXT)],
            e.to_string(),
        )
            .into_response(),
    }
}
