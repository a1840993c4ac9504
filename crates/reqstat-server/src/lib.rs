//! reqstat server library entry.
//!
//! Wires the counting HTTP handler and the metrics reporter around one shared
//! [`AppState`](app_state::AppState). Consumed by `main.rs` and by the
//! integration tests.

pub mod app_state;
pub mod config;
pub mod handler;
pub mod reporter;
pub mod router;
pub mod server;
