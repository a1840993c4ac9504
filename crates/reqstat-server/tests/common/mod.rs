//! Shared test fixtures: an in-process app server and a stub collector.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use tokio::net::TcpListener;

use reqstat_server::{app_state::AppState, config::AppConfig, server};

pub fn cfg(host: &str, replicaset: &str, url: &str) -> AppConfig {
    AppConfig {
        host: host.into(),
        replicaset: replicaset.into(),
        influxdb_url: url.into(),
    }
}

/// Start the counting server on an ephemeral port.
pub async fn spawn_app(state: AppState) -> SocketAddr {
    let listener = server::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server::serve(listener, state, std::future::pending()));
    addr
}

#[derive(Debug, Clone)]
pub struct Received {
    pub content_type: String,
    pub body: String,
}

#[derive(Clone)]
pub struct Collector {
    pub received: Arc<Mutex<Vec<Received>>>,
    status: u16,
}

impl Collector {
    pub fn lines(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }
}

/// Start a collector that records every POST to `/write` and answers `status`.
pub async fn spawn_collector(status: u16) -> (Collector, String) {
    let collector = Collector {
        received: Arc::new(Mutex::new(Vec::new())),
        status,
    };
    let app = Router::new()
        .route("/write", post(ingest))
        .with_state(collector.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    (collector, format!("http://{addr}/write"))
}

async fn ingest(State(c): State<Collector>, headers: HeaderMap, body: String) -> StatusCode {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    c.received.lock().unwrap().push(Received { content_type, body });
    StatusCode::from_u16(c.status).unwrap()
}

/// A URL nothing listens on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/write")
}
