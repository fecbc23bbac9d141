// src/api/state.rs
use crate::config::AppConfig;
use reqwest::Client;
use std::sync::Arc;

/// Immutable per-process state shared with every worker.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub client: Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: AppConfig, client: Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }
}
