//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! read-only after startup: the parsed configuration plus one pooled HTTP
//! client used for every backend call (session lookups and `/api` forwarding).

use std::sync::Arc;
use std::time::Duration;

use crate::config::ServerConfig;

/// Clone is required by Axum; both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state and the backend HTTP client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` builder error if the TLS backend cannot be initialised.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
