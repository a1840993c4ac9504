//! Periodic request-count reporter.
//!
//! Once per tick: load the counter, render one line of line protocol and POST
//! it to the collector. Delivery is best effort. A failed tick is logged and
//! dropped; the next tick sends a fresh value.

use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use reqstat_core::{requests_line, Result, StatsError, StatusClass};

use crate::app_state::AppState;
use crate::config::{CONNECT_TIMEOUT, POST_TIMEOUT, REPORT_INTERVAL};

pub struct Reporter {
    client: Client,
    state: AppState,
    interval: Duration,
}

impl Reporter {
    pub fn new(state: &AppState) -> Result<Self> {
        let client = Client::builder()
            .timeout(POST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| StatsError::Internal(format!("failed to create http client: {e}")))?;

        Ok(Self {
            client,
            state: state.clone(),
            interval: REPORT_INTERVAL,
        })
    }

    /// Override the tick period.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// The line the next tick would send right now.
    pub fn line(&self) -> String {
        let cfg = self.state.cfg();
        requests_line(&cfg.host, &cfg.replicaset, self.state.counter().get())
    }

    /// One tick: a single POST, no retry.
    pub async fn report_once(&self) -> Result<()> {
        let resp = self
            .client
            .post(&self.state.cfg().influxdb_url)
            .header(CONTENT_TYPE, "text/plain")
            .body(self.line())
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        drop(resp);

        if status != StatusCode::NO_CONTENT {
            return Err(StatsError::UnexpectedStatus { status: status.as_u16() });
        }
        Ok(())
    }

    /// Run the tick loop on its own task until `token` is cancelled.
    pub fn spawn(self, token: CancellationToken) -> JoinHandle<()> {
        tokio::spawn(self.run(token))
    }

    pub async fn run(self, token: CancellationToken) {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::info!(url = %self.state.cfg().influxdb_url, interval_ms = self.interval.as_millis() as u64, "metrics reporter started");

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticker.tick() => {}
            }

            match self.report_once().await {
                Ok(()) => tracing::debug!("metrics line delivered"),
                Err(e) => log_failure(&e),
            }
        }

        tracing::info!("metrics reporter stopped");
    }
}

fn transport_error(e: reqwest::Error) -> StatsError {
    if e.is_timeout() {
        StatsError::Transport(format!("request timed out: {e}"))
    } else if e.is_connect() {
        StatsError::Transport(format!("connection failed: {e}"))
    } else if e.is_builder() {
        StatsError::Transport(format!("invalid request: {e}"))
    } else {
        StatsError::Transport(format!("request failed: {e}"))
    }
}

fn log_failure(e: &StatsError) {
    match e.status_class() {
        Some(class @ StatusClass::Client) => {
            tracing::warn!(class = class.as_str(), error = %e, "collector rejected metrics line")
        }
        Some(class @ StatusClass::Server) => {
            tracing::warn!(class = class.as_str(), error = %e, "collector failed to store metrics line")
        }
        Some(class) => tracing::warn!(class = class.as_str(), error = %e, "unexpected collector response"),
        None => tracing::error!(error = %e, "metrics report failed"),
    }
}
