use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use rpcgate_core::error::Result;

/// Response relayed back from an upstream, returned to the client verbatim.
#[derive(Debug)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Bytes,
}

/// A named internal destination for allowed requests.
#[async_trait]
pub trait JsonRpcUpstream: Send + Sync {
    fn route(&self) -> &'static str;
    async fn forward(&self, body: Bytes) -> Result<UpstreamReply>;
}

/// Registry of upstream handlers keyed by route name.
#[derive(Default)]
pub struct UpstreamRegistry {
    routes: DashMap<&'static str, Arc<dyn JsonRpcUpstream>>,
}

impl UpstreamRegistry {
    pub fn new() -> Self {
        Self {
            routes: DashMap::new(),
        }
    }

    pub fn register(&self, upstream: Arc<dyn JsonRpcUpstream>) {
        self.routes.insert(upstream.route(), upstream);
    }

    pub fn get(&self, route: &str) -> Option<Arc<dyn JsonRpcUpstream>> {
        self.routes.get(route).map(|e| e.value().clone())
    }

    pub fn registered_routes(&self) -> Vec<&'static str> {
        self.routes.iter().map(|e| *e.key()).collect()
    }
}
