//! Listener setup and the serve loop.

use std::future::Future;

use tokio::net::TcpListener;

use reqstat_core::{Result, StatsError};

use crate::{app_state::AppState, router};

pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| StatsError::Bind(format!("{addr}: {e}")))
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router::build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| StatsError::Internal(format!("server failed: {e}")))
}
