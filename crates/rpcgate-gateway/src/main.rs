//! rpcgate gateway binary.
//!
//! - Gated JSON-RPC entry: POST /
//! - Ops endpoints: /healthz /readyz /metrics
//! - Graceful shutdown: ctrl-c flips /readyz to draining before the
//!   listener stops

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use rpcgate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "rpcgate.yaml".to_string());
    let cfg = config::load_from_file(&path).expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("state build failed");
    let app = router::build_router(state.clone());

    tracing::info!(%listen, allowlist = state.gate().allowlist_len(), "rpcgate starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown(state))
        .await
        .expect("server failed");
}

async fn shutdown(state: app_state::AppState) {
    let _ = tokio::signal::ctrl_c().await;
    state.set_draining();
    tracing::info!("shutdown signal received, draining");
}
