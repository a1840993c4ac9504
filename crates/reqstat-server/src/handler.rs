//! Request counting handler.

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::IntoResponse,
};

use crate::app_state::AppState;

/// Count this request and answer with the number served before it.
pub async fn count(State(app): State<AppState>, method: Method, uri: Uri) -> impl IntoResponse {
    let served = app.counter().next();
    tracing::trace!(%method, path = %uri.path(), count = served, "request counted");

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body(served),
    )
}

pub fn body(served: u64) -> String {
    format!("Current request count {served}\n")
}
