use std::sync::Arc;

use roster_upstream::UpstreamClient;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn UpstreamClient>,
}

impl AppState {
    pub fn new(upstream: Arc<dyn UpstreamClient>) -> Self {
        Self { upstream }
    }
}
