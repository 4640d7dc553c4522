pub mod api;
pub mod config;
pub mod error;
pub mod extractor;
pub mod relay;
pub mod telemetry;
pub mod upstream;

use std::sync::Arc;
use config::Config;
use upstream::UpstreamClient;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub upstream: Arc<UpstreamClient>,
}

impl AppState {
    pub fn new(config: Config) -> error::Result<Self> {
        let upstream = UpstreamClient::new(config.upstream.clone())?;
        Ok(Self {
            config: Arc::new(config),
            upstream: Arc::new(upstream),
        })
    }
}
