//! rpcgate gateway library entry.
//!
//! This crate wires the HTTP transport, the request gate, config loading,
//! the upstream forwarder, and operational endpoints into a deployable
//! access-control proxy. It is intended to be consumed by the binary
//! (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod transport;
pub mod upstream;
