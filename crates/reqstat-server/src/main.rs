//! reqstat server
//!
//! - Counts every HTTP request on :8000 and echoes the prior count
//! - Reports the count to an InfluxDB-compatible endpoint once per second
//! - Ctrl-C / SIGTERM: stop the reporter, drain HTTP, exit

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reqstat_core::Result;
use reqstat_server::{app_state::AppState, config, reporter::Reporter, server};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "reqstat-server exiting");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env();
    tracing::info!(
        host = %cfg.host,
        replicaset = %cfg.replicaset,
        url = %cfg.influxdb_url,
        "reqstat-server starting"
    );

    let state = AppState::new(cfg);

    let token = CancellationToken::new();
    let reporter = Reporter::new(&state)?.spawn(token.clone());

    let listener = server::bind(config::LISTEN_ADDR).await?;
    tracing::info!(listen = config::LISTEN_ADDR, "listening");

    let served = server::serve(listener, state, shutdown_signal()).await;

    token.cancel();
    if let Err(e) = reporter.await {
        tracing::warn!(error = %e, "metrics reporter task ended abnormally");
    }

    served
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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

    tracing::info!("shutdown signal received");
}
