//! Shared error type across rpcgate crates.
//!
//! This covers operational failures (config, upstream transport, wiring).
//! Client-facing rejections are not errors — they are `Verdict::Reject`
//! values produced by the gate and carry their own status/message mapping.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, RpcGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum RpcGateError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("upstream: {0}")]
    Upstream(String),
    #[error("internal: {0}")]
    Internal(String),
}
