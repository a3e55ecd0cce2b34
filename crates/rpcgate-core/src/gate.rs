//! The request gate: envelope validation plus allowlist matching.
//!
//! `RequestGate::evaluate` is a pure function of the request body and the
//! immutable gate state. It performs no I/O and writes no response; the
//! calling collaborator acts on the returned `Verdict`. Construct once at
//! startup, then share via `Arc` — concurrent evaluations need no locking.

use std::collections::HashSet;

use crate::protocol::envelope::JsonRpcEnvelope;

/// Internal route an allowed request is forwarded to. Opaque to the gate;
/// it only supplies the name.
pub const FORWARD_ROUTE: &str = "@jsonrpc";

/// Why a request was rejected. Every reject maps to exactly one of these;
/// there is no fallback reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Body is not parseable as a JSON object.
    MalformedPayload,
    /// `jsonrpc` field present (and checked) with a value other than "2.0".
    VersionNotSupported,
    /// Method missing, not a string, smuggled via key casing, or absent
    /// from the allowlist.
    MethodNotAllowed,
}

/// The two client-facing error kinds (stable taxonomy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectKind {
    MalformedPayload,
    PolicyViolation,
}

impl RejectReason {
    /// HTTP status the calling collaborator should emit.
    pub fn status(self) -> u16 {
        match self {
            RejectReason::MalformedPayload => 415,
            RejectReason::VersionNotSupported => 401,
            RejectReason::MethodNotAllowed => 401,
        }
    }

    /// Plain-text response body (without trailing newline).
    pub fn message(self) -> &'static str {
        match self {
            RejectReason::MalformedPayload => "Cannot parse payload into JSON",
            RejectReason::VersionNotSupported => "jsonrpc version not supported",
            RejectReason::MethodNotAllowed => "jsonrpc method is not allowed",
        }
    }

    /// Map to the stable two-kind taxonomy.
    pub fn kind(self) -> RejectKind {
        match self {
            RejectReason::MalformedPayload => RejectKind::MalformedPayload,
            RejectReason::VersionNotSupported | RejectReason::MethodNotAllowed => {
                RejectKind::PolicyViolation
            }
        }
    }

    /// Label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::MalformedPayload => "malformed_payload",
            RejectReason::VersionNotSupported => "version_not_supported",
            RejectReason::MethodNotAllowed => "method_not_allowed",
        }
    }
}

/// Decision from one gate evaluation. Consumed immediately by the caller:
/// either exactly one rejection response is emitted, or exactly one
/// forward occurs, never both, never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Forward(&'static str),
    Reject(RejectReason),
}

/// Behavior toggles for deployment variants that diverged in the wild.
#[derive(Debug, Clone, Copy)]
pub struct GateOptions {
    /// Reject when a `jsonrpc` field is present with a value other than
    /// the literal "2.0". An absent field always passes.
    pub enforce_version: bool,
    /// Case-normalize method names on both sides of the allowlist match.
    pub normalize_method_case: bool,
    /// Reject bodies where more than one surface key case-folds to
    /// `method`. Only meaningful behind a key-normalizing parse layer.
    pub guard_duplicate_method_keys: bool,
}

impl Default for GateOptions {
    fn default() -> Self {
        Self {
            enforce_version: true,
            normalize_method_case: true,
            guard_duplicate_method_keys: false,
        }
    }
}

/// Compiled gate. Immutable for the life of the instance; recreated only
/// on reload.
#[derive(Debug)]
pub struct RequestGate {
    allow: HashSet<String>,
    opts: GateOptions,
}

impl RequestGate {
    /// Compile an allowlist of canonical method names. Entries are
    /// case-normalized here once so `evaluate` stays a set lookup. An
    /// empty allowlist is legal and rejects every method (strict deny).
    pub fn new<I, S>(methods: I, opts: GateOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allow = methods
            .into_iter()
            .map(|m| {
                let m = m.into();
                if opts.normalize_method_case {
                    m.to_ascii_lowercase()
                } else {
                    m
                }
            })
            .collect();
        Self { allow, opts }
    }

    /// Number of compiled allowlist entries.
    pub fn allowlist_len(&self) -> usize {
        self.allow.len()
    }

    /// Evaluate one untrusted request body.
    ///
    /// Checks run in order, each short-circuiting to a reject: parse,
    /// version, duplicate-key guard, allowlist. Matching is exact string
    /// equality against the full set — no prefix or wildcard matching.
    pub fn evaluate(&self, raw: &[u8]) -> Verdict {
        // Parse first, unconditionally: the payload is attacker-controlled
        // and structurally unverified until here.
        let Some(env) = JsonRpcEnvelope::parse(raw) else {
            return Verdict::Reject(RejectReason::MalformedPayload);
        };

        if self.opts.enforce_version && env.version_mismatch() {
            return Verdict::Reject(RejectReason::VersionNotSupported);
        }

        if self.opts.guard_duplicate_method_keys && env.method_key_hits > 1 {
            return Verdict::Reject(RejectReason::MethodNotAllowed);
        }

        let Some(method) = env.method.as_deref() else {
            return Verdict::Reject(RejectReason::MethodNotAllowed);
        };

        let allowed = if self.opts.normalize_method_case {
            self.allow.contains(&method.to_ascii_lowercase())
        } else {
            self.allow.contains(method)
        };
        if !allowed {
            return Verdict::Reject(RejectReason::MethodNotAllowed);
        }

        Verdict::Forward(FORWARD_ROUTE)
    }
}
