//! Axum router wiring.
//!
//! There are no routes: every path and method lands on the counting
//! fallback.

use axum::Router;

use crate::{app_state::AppState, handler};

pub fn build_router(state: AppState) -> Router {
    Router::new().fallback(handler::count).with_state(state)
}
