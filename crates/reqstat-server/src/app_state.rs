//! Shared application state.
//!
//! Holds the request counter and the immutable config. Cloned into every
//! handler and into the reporter; the counter is the only mutable part.

use std::sync::Arc;

use reqstat_core::RequestCounter;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AppConfig,
    counter: RequestCounter,
}

impl AppState {
    pub fn new(cfg: AppConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                counter: RequestCounter::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.inner.cfg
    }

    pub fn counter(&self) -> &RequestCounter {
        &self.inner.counter
    }
}
