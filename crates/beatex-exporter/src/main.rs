//! beats-exporter
//!
//! Polls Elastic Beats' `/stats` endpoints and serves them as flat text
//! metrics on `/metrics`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use beatex_exporter::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    let cfg = match config::Args::parse().into_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("beats-exporter: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cfg.exporter.log.as_str())),
        )
        .init();

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "beats-exporter failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: config::ExporterConfig) -> beatex_core::Result<()> {
    let listen = cfg.exporter.listen_addr()?;

    // Identities are resolved before binding; an unreachable Beat aborts startup.
    let state = AppState::bootstrap(cfg).await?;
    tracing::info!(
        sources = state.registry().len(),
        filters = state.cfg().filters.len(),
        "sources resolved"
    );

    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| beatex_core::BeatexError::Internal(format!("failed to bind {listen}: {e}")))?;
    tracing::info!(%listen, "beats-exporter starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| beatex_core::BeatexError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
