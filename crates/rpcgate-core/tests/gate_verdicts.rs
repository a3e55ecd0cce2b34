//! Gate verdict tests: the gate as a pure predicate.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use rpcgate_core::gate::{GateOptions, RejectReason, RequestGate, Verdict, FORWARD_ROUTE};

fn gate(methods: &[&str]) -> RequestGate {
    RequestGate::new(methods.iter().copied(), GateOptions::default())
}

fn gate_with(methods: &[&str], opts: GateOptions) -> RequestGate {
    RequestGate::new(methods.iter().copied(), opts)
}

#[test]
fn non_json_body_is_malformed() {
    let g = gate(&["eth_call"]);
    assert_eq!(
        g.evaluate(b"not-json"),
        Verdict::Reject(RejectReason::MalformedPayload)
    );
}

#[test]
fn non_object_top_level_is_malformed() {
    let g = gate(&["eth_call"]);
    for body in [&b"[]"[..], b"42", b"\"eth_call\"", b"null", b""] {
        assert_eq!(
            g.evaluate(body),
            Verdict::Reject(RejectReason::MalformedPayload),
            "body: {body:?}"
        );
    }
}

#[test]
fn non_utf8_body_is_malformed() {
    let g = gate(&["eth_call"]);
    assert_eq!(
        g.evaluate(&[0xff, 0xfe, 0x7b]),
        Verdict::Reject(RejectReason::MalformedPayload)
    );
}

#[test]
fn missing_method_is_not_allowed() {
    let g = gate(&["eth_call"]);
    assert_eq!(
        g.evaluate(br#"{"jsonrpc":"2.0","id":1}"#),
        Verdict::Reject(RejectReason::MethodNotAllowed)
    );
}

#[test]
fn non_string_method_is_not_allowed() {
    let g = gate(&["eth_call"]);
    assert_eq!(
        g.evaluate(br#"{"jsonrpc":"2.0","method":7}"#),
        Verdict::Reject(RejectReason::MethodNotAllowed)
    );
}

#[test]
fn unlisted_method_is_not_allowed() {
    let g = gate(&["eth_chainid", "eth_blocknumber"]);
    assert_eq!(
        g.evaluate(br#"{"method":"eth_sendTransaction"}"#),
        Verdict::Reject(RejectReason::MethodNotAllowed)
    );
}

#[test]
fn matching_is_exact_not_prefix() {
    let g = gate(&["eth_call"]);
    assert_eq!(
        g.evaluate(br#"{"jsonrpc":"2.0","method":"eth_call2"}"#),
        Verdict::Reject(RejectReason::MethodNotAllowed)
    );
    assert_eq!(
        g.evaluate(br#"{"jsonrpc":"2.0","method":"eth_cal"}"#),
        Verdict::Reject(RejectReason::MethodNotAllowed)
    );
}

#[test]
fn allowed_method_forwards_to_fixed_route() {
    let g = gate(&["eth_chainid"]);
    assert_eq!(
        g.evaluate(br#"{"jsonrpc":"2.0","method":"eth_chainId","id":1}"#),
        Verdict::Forward(FORWARD_ROUTE)
    );
    assert_eq!(FORWARD_ROUTE, "@jsonrpc");
}

#[test]
fn wrong_version_rejected_before_allowlist() {
    let g = gate(&["eth_chainid"]);
    // Method is allowlisted, version still wins.
    assert_eq!(
        g.evaluate(br#"{"jsonrpc":"1.0","method":"eth_chainId"}"#),
        Verdict::Reject(RejectReason::VersionNotSupported)
    );
    // Non-string version value is also a mismatch.
    assert_eq!(
        g.evaluate(br#"{"jsonrpc":2.0,"method":"eth_chainId"}"#),
        Verdict::Reject(RejectReason::VersionNotSupported)
    );
}

#[test]
fn absent_version_field_passes_enforcement() {
    let g = gate(&["eth_chainid"]);
    assert_eq!(
        g.evaluate(br#"{"method":"eth_chainId"}"#),
        Verdict::Forward(FORWARD_ROUTE)
    );
}

#[test]
fn version_enforcement_can_be_disabled() {
    let g = gate_with(
        &["eth_chainid"],
        GateOptions {
            enforce_version: false,
            ..GateOptions::default()
        },
    );
    assert_eq!(
        g.evaluate(br#"{"jsonrpc":"1.0","method":"eth_chainId"}"#),
        Verdict::Forward(FORWARD_ROUTE)
    );
}

#[test]
fn case_normalized_matching_can_be_disabled() {
    let g = gate_with(
        &["eth_chainId"],
        GateOptions {
            normalize_method_case: false,
            ..GateOptions::default()
        },
    );
    assert_eq!(
        g.evaluate(br#"{"method":"eth_chainId"}"#),
        Verdict::Forward(FORWARD_ROUTE)
    );
    assert_eq!(
        g.evaluate(br#"{"method":"eth_chainid"}"#),
        Verdict::Reject(RejectReason::MethodNotAllowed)
    );
}

#[test]
fn duplicate_method_keys_rejected_when_guarded() {
    let body = br#"{"method":"eth_call","Method":"eth_sendTransaction"}"#;
    let guarded = gate_with(
        &["eth_call"],
        GateOptions {
            guard_duplicate_method_keys: true,
            ..GateOptions::default()
        },
    );
    assert_eq!(
        guarded.evaluate(body),
        Verdict::Reject(RejectReason::MethodNotAllowed)
    );

    // Guard off: the exact `method` key wins and is allowlisted.
    let open = gate(&["eth_call"]);
    assert_eq!(open.evaluate(body), Verdict::Forward(FORWARD_ROUTE));
}

#[test]
fn empty_allowlist_is_strict_deny() {
    let g = gate(&[]);
    assert_eq!(
        g.evaluate(br#"{"jsonrpc":"2.0","method":"eth_chainId"}"#),
        Verdict::Reject(RejectReason::MethodNotAllowed)
    );
}

#[test]
fn evaluate_is_idempotent() {
    let g = gate(&["eth_call"]);
    for body in [
        &br#"{"jsonrpc":"2.0","method":"eth_call","id":1}"#[..],
        br#"{"method":"eth_getLogs"}"#,
        b"not-json",
    ] {
        assert_eq!(g.evaluate(body), g.evaluate(body));
    }
}

#[test]
fn reject_surface_is_status_plus_meaning() {
    assert_eq!(RejectReason::MalformedPayload.status(), 415);
    assert_eq!(
        RejectReason::MalformedPayload.message(),
        "Cannot parse payload into JSON"
    );
    assert_eq!(RejectReason::VersionNotSupported.status(), 401);
    assert_eq!(
        RejectReason::VersionNotSupported.message(),
        "jsonrpc version not supported"
    );
    assert_eq!(RejectReason::MethodNotAllowed.status(), 401);
    // Wording varied across observed deployments; assert meaning only.
    assert!(RejectReason::MethodNotAllowed.message().contains("not allow"));
}

#[test]
fn reject_kinds_cover_exactly_two_taxonomies() {
    use rpcgate_core::gate::RejectKind;
    assert_eq!(
        RejectReason::MalformedPayload.kind(),
        RejectKind::MalformedPayload
    );
    assert_eq!(
        RejectReason::VersionNotSupported.kind(),
        RejectKind::PolicyViolation
    );
    assert_eq!(
        RejectReason::MethodNotAllowed.kind(),
        RejectKind::PolicyViolation
    );
}
