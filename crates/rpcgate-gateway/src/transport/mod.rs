//! Transport layer (HTTP).
//!
//! Exposes the request entry handler that evaluates every inbound body
//! against the gate before anything reaches the upstream.

pub mod entry;
