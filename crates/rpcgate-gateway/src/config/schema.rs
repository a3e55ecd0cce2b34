use serde::Deserialize;
use rpcgate_core::error::{Result, RpcGateError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    pub upstream: UpstreamSection,

    #[serde(default)]
    pub policy: PolicySection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RpcGateError::InvalidConfig(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.gateway.validate()?;
        self.upstream.validate()?;
        self.policy.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if !(1024..=33_554_432).contains(&self.max_body_bytes) {
            return Err(RpcGateError::InvalidConfig(
                "gateway.max_body_bytes must be between 1024 and 33554432".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8545".into()
}
fn default_max_body_bytes() -> usize {
    1_048_576
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    pub url: String,

    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(RpcGateError::InvalidConfig(
                "upstream.url must not be empty".into(),
            ));
        }
        if !(100..=120_000).contains(&self.request_timeout_ms) {
            return Err(RpcGateError::InvalidConfig(
                "upstream.request_timeout_ms must be between 100 and 120000".into(),
            ));
        }
        if !(100..=60_000).contains(&self.connect_timeout_ms) {
            return Err(RpcGateError::InvalidConfig(
                "upstream.connect_timeout_ms must be between 100 and 60000".into(),
            ));
        }
        if self.request_timeout_ms < self.connect_timeout_ms {
            return Err(RpcGateError::InvalidConfig(
                "upstream.request_timeout_ms must not be less than connect_timeout_ms".into(),
            ));
        }
        Ok(())
    }
}

fn default_request_timeout_ms() -> u64 {
    15_000
}
fn default_connect_timeout_ms() -> u64 {
    3_000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicySection {
    /// Method allowlist. Empty means strict deny.
    #[serde(default)]
    pub allow: Vec<String>,

    #[serde(default = "default_true")]
    pub enforce_version: bool,

    #[serde(default = "default_true")]
    pub normalize_method_case: bool,

    #[serde(default)]
    pub guard_duplicate_method_keys: bool,
}

impl Default for PolicySection {
    fn default() -> Self {
        Self {
            allow: Vec::new(),
            enforce_version: default_true(),
            normalize_method_case: default_true(),
            guard_duplicate_method_keys: false,
        }
    }
}

impl PolicySection {
    pub fn validate(&self) -> Result<()> {
        for m in &self.allow {
            if m.trim().is_empty() {
                return Err(RpcGateError::InvalidConfig(
                    "policy.allow entries must not be blank".into(),
                ));
            }
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}
