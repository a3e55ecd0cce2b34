//! Shared application state for the rpcgate gateway.
//!
//! Construction compiles the gate from the policy section and wires the
//! upstream registry. Startup errors are explicit (Result instead of
//! panic); `main` decides how to surface them.

use std::sync::Arc;

use rpcgate_core::error::{Result, RpcGateError};
use rpcgate_core::gate::{GateOptions, RequestGate, FORWARD_ROUTE};

use crate::config::GatewayConfig;
use crate::obs::metrics::GatewayMetrics;
use crate::upstream::{HttpUpstream, UpstreamRegistry};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    gate: RequestGate,
    upstreams: UpstreamRegistry,
    metrics: GatewayMetrics,
}

impl AppState {
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        // 1) Compile the gate from the policy section
        let opts = GateOptions {
            enforce_version: cfg.policy.enforce_version,
            normalize_method_case: cfg.policy.normalize_method_case,
            guard_duplicate_method_keys: cfg.policy.guard_duplicate_method_keys,
        };
        let gate = RequestGate::new(cfg.policy.allow.iter().cloned(), opts);

        if gate.allowlist_len() == 0 {
            tracing::warn!("policy.allow is empty, every method will be rejected");
        }

        // 2) Wire the upstream registry
        let upstreams = UpstreamRegistry::new();
        let http = HttpUpstream::new(FORWARD_ROUTE, &cfg.upstream)?;
        upstreams.register(Arc::new(http));

        // forward route <-> registry sanity check: a verdict naming an
        // unregistered route could never complete a request.
        if upstreams.get(FORWARD_ROUTE).is_none() {
            return Err(RpcGateError::InvalidConfig(format!(
                "forward route {FORWARD_ROUTE} has no registered upstream"
            )));
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                gate,
                upstreams,
                metrics: GatewayMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn gate(&self) -> &RequestGate {
        &self.inner.gate
    }

    pub fn upstreams(&self) -> &UpstreamRegistry {
        &self.inner.upstreams
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }
}
