use std::sync::Arc;

use crate::config::Config;
use crate::fetcher::{ApiClient, HttpApiClient};

/// Wires the configured API client to everything that runs a load cycle.
pub struct AppContext {
    pub client: Arc<dyn ApiClient + Send + Sync>,
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let client: Arc<dyn ApiClient + Send + Sync> = Arc::new(HttpApiClient::new(
            &config.api_base_url,
            config.http_timeout(),
        ));
        Self { client, config }
    }
}
