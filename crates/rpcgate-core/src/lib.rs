//! rpcgate core: JSON-RPC envelope parsing and the access-control gate.
//!
//! This crate defines the decision surface shared by the gateway and any
//! embedding process: envelope validation, allowlist matching, and the
//! verdict types. It intentionally carries no transport or runtime
//! dependencies so the gate stays testable as a pure predicate.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! The request body is attacker-controlled; every malformed input must map
//! to a `Verdict::Reject`, never a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod gate;
pub mod protocol;

pub use error::{Result, RpcGateError};
pub use gate::{GateOptions, RejectReason, RequestGate, Verdict, FORWARD_ROUTE};
