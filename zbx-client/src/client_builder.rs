//! Client builder
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use zbx_client::ClientBuilder;
//!
//! # async fn example() -> zbx_core::Result<()> {
//! let client = ClientBuilder::new("ws://localhost:8080")
//!     .request_timeout(Duration::from_secs(10))
//!     .with_default_observability()
//!     .service_name("item-sync")
//!     .connect()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use crate::{ClientMetrics, RpcClient};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use zbx_core::{Error, ObservabilityConfig, Result};

/// Request timeout used unless configured otherwise
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static OBSERVABILITY_INIT: OnceLock<()> = OnceLock::new();

/// Builder for configuring and creating an [`RpcClient`]
pub struct ClientBuilder {
    url: String,
    request_timeout: Option<Duration>,
    observability_config: Option<ObservabilityConfig>,
    service_name: Option<String>,
}

impl ClientBuilder {
    /// Create a builder for the given `ws://` or `wss://` URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
            observability_config: None,
            service_name: None,
        }
    }

    /// Fail requests that get no answer within `timeout`
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Wait for answers indefinitely
    pub fn without_timeout(mut self) -> Self {
        self.request_timeout = None;
        self
    }

    /// Enable observability with a custom configuration
    pub fn with_observability(mut self, config: ObservabilityConfig) -> Self {
        self.observability_config = Some(config);
        self
    }

    /// Enable observability with the default configuration
    pub fn with_default_observability(mut self) -> Self {
        self.observability_config = Some(ObservabilityConfig::default());
        self
    }

    /// Service name for observability (only used if observability is enabled)
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    /// Build and connect the client
    ///
    /// Observability is initialized by the first builder that asks for it;
    /// later builders only create their metrics.
    pub async fn connect(self) -> Result<RpcClient> {
        let metrics = match self.observability_config {
            Some(mut config) => {
                if let Some(name) = self.service_name {
                    config.service_name = name;
                }

                if OBSERVABILITY_INIT.get().is_none() {
                    zbx_core::init_observability(config.clone()).map_err(|e| {
                        Error::Internal(format!("Failed to initialize observability: {}", e))
                    })?;
                    let _ = OBSERVABILITY_INIT.set(());
                }

                Some(Arc::new(ClientMetrics::new(config.service_name)))
            }
            None => None,
        };

        RpcClient::establish(&self.url, self.request_timeout, metrics).await
    }
}
