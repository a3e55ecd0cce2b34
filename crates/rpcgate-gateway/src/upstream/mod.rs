//! Upstream layer (named internal routes).
//!
//! The gate only names a route; this layer owns what a forward actually
//! does. Routes are registered at boot and read-only afterwards.

pub mod http;
pub mod registry;

pub use http::HttpUpstream;
pub use registry::{JsonRpcUpstream, UpstreamRegistry, UpstreamReply};
