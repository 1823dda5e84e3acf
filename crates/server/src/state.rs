//! Application state shared across handlers.

use std::sync::Arc;
use upclink_core::config::AppConfig;
use upclink_upstream::EbayClient;

/// Shared application state.
///
/// Built once at startup from the immutable configuration; requests share
/// no mutable state, so cloning is cheap and lock-free.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Upstream marketplace API client.
    pub upstream: Arc<EbayClient>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: AppConfig) -> Self {
        let upstream = Arc::new(EbayClient::new(config.upstream.clone()));
        Self {
            config: Arc::new(config),
            upstream,
        }
    }
}
