//! Axum router wiring.
//!
//! `POST /` is the gated JSON-RPC entry; body size is capped here so the
//! gate itself never sees oversized payloads. Ops endpoints are mounted
//! outside the body-limit layer.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let max_body = state.cfg().gateway.max_body_bytes;

    Router::new()
        .route("/", post(transport::entry::rpc_entry))
        .layer(DefaultBodyLimit::max(max_body))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
