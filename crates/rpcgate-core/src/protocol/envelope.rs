//! JSON-RPC envelope (HTTP request body).
//!
//! Parsed by hand over `serde_json::Map` rather than a derived struct:
//! the gate needs to observe how many surface keys case-fold to `method`,
//! and a derive would collapse that to a single field. `params` and `id`
//! are deliberately left uninspected.

use serde_json::{Map, Value};

/// Literal version string a conforming request carries.
pub const JSONRPC_VERSION: &str = "2.0";

/// Envelope view of one request body. Lives only for the duration of one
/// gate evaluation.
#[derive(Debug)]
pub struct JsonRpcEnvelope {
    /// Raw `jsonrpc` field value, if the key is present at all.
    pub jsonrpc: Option<Value>,
    /// `method` field value, if present under the exact `method` key and
    /// of string type.
    pub method: Option<String>,
    /// Number of surface keys that case-fold to `method`.
    pub method_key_hits: usize,
}

impl JsonRpcEnvelope {
    /// Parse an untrusted request body. Returns `None` for anything that
    /// is not a JSON object (malformed JSON, non-UTF8, arrays, scalars).
    pub fn parse(raw: &[u8]) -> Option<Self> {
        let map = match serde_json::from_slice::<Value>(raw) {
            Ok(Value::Object(map)) => map,
            _ => return None,
        };
        Some(Self::from_map(map))
    }

    fn from_map(map: Map<String, Value>) -> Self {
        let method_key_hits = map
            .keys()
            .filter(|k| k.eq_ignore_ascii_case("method"))
            .count();

        let method = match map.get("method") {
            Some(Value::String(m)) => Some(m.clone()),
            _ => None,
        };

        Self {
            jsonrpc: map.get("jsonrpc").cloned(),
            method,
            method_key_hits,
        }
    }

    /// Whether the `jsonrpc` field, if present, names a version other
    /// than `"2.0"`. An absent field is not a mismatch.
    pub fn version_mismatch(&self) -> bool {
        match &self.jsonrpc {
            None => false,
            Some(v) => v.as_str() != Some(JSONRPC_VERSION),
        }
    }
}
