//! Protocol module (JSON-RPC over HTTP).
//!
//! Hosts the envelope view of an inbound request body. Parsing is
//! panic-free: anything that is not a JSON object surfaces as an absent
//! envelope, which the gate maps to a terminal rejection instead of
//! panicking on hostile traffic.

pub mod envelope;
