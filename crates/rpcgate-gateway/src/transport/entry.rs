//! Request entry handler.
//!
//! Responsibilities:
//! - Read the raw body (untrusted bytes, content-type not enforced)
//! - Evaluate it against the gate
//! - Act on the verdict: emit the rejection verbatim, or relay to the
//!   upstream named by the forward route
//!
//! Exactly one terminal action per request: one rejection response or one
//! forward, never both, never zero.

use std::time::Instant;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use rpcgate_core::gate::{RejectReason, Verdict};

use crate::app_state::AppState;

pub async fn rpc_entry(State(app): State<AppState>, body: Bytes) -> Response {
    app.metrics().requests.inc(&[("route", "/")]);

    match app.gate().evaluate(&body) {
        Verdict::Forward(route) => {
            app.metrics()
                .verdicts
                .inc(&[("verdict", "forward"), ("reason", "allowed")]);
            forward(app, route, body).await
        }
        Verdict::Reject(reason) => {
            tracing::debug!(
                status = reason.status(),
                reason = reason.as_str(),
                "request rejected"
            );
            app.metrics()
                .verdicts
                .inc(&[("verdict", "reject"), ("reason", reason.as_str())]);
            reject_response(reason)
        }
    }
}

async fn forward(app: AppState, route: &'static str, body: Bytes) -> Response {
    let Some(upstream) = app.upstreams().get(route) else {
        // Boot-time sanity check makes this unreachable in practice.
        tracing::error!(route, "no upstream registered for forward route");
        return bad_gateway();
    };

    let started = Instant::now();
    match upstream.forward(body).await {
        Ok(reply) => {
            app.metrics()
                .forward_duration
                .observe(&[("route", route)], started.elapsed());
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                reply.body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::warn!(route, error = %e, "upstream forward failed");
            app.metrics().upstream_errors.inc(&[("route", route)]);
            bad_gateway()
        }
    }
}

fn reject_response(reason: RejectReason) -> Response {
    let status = StatusCode::from_u16(reason.status()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, format!("{}\n", reason.message())).into_response()
}

fn bad_gateway() -> Response {
    (StatusCode::BAD_GATEWAY, "upstream unavailable\n").into_response()
}
