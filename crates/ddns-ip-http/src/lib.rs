// # HTTP IP Source
//
// This crate provides the public IP lookup for the DDNS updater.
//
// ## Purpose
//
// When no `--ip` is given, the updater asks an external "what is my IP"
// service for the caller's public address. The service answers a plain GET
// with the address as a text body.
//
// ## Behavior
//
// - ONE GET per run, no auth, no params
// - Finite timeout (10 seconds)
// - NO retry: any failure is reported as `Error::IpLookupFailed`
// - The body is trimmed but NOT validated (validation is owned by the updater)

use ddns_core::config::validate_http_url;
use ddns_core::traits::IpSource;
use ddns_core::{Error, Result};

use std::time::Duration;

/// Default IP echo service (returns plain text IP)
pub const DEFAULT_IP_SERVICE: &str = "https://api.ipify.org";

/// Default HTTP timeout for the lookup
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the HTTP IP source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpIpSourceConfig {
    /// URL to fetch IP from
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl HttpIpSourceConfig {
    /// Validate the IP source configuration
    pub fn validate(&self) -> Result<()> {
        validate_http_url("IP lookup URL", &self.url)?;
        if self.timeout.is_zero() {
            return Err(Error::config("IP lookup timeout must be > 0"));
        }
        Ok(())
    }
}

impl Default for HttpIpSourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_IP_SERVICE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP-based IP source
#[derive(Debug)]
pub struct HttpIpSource {
    /// URL to fetch IP from
    url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpIpSource {
    /// Create a new HTTP IP source with the default timeout
    ///
    /// # Parameters
    ///
    /// - `url`: URL to fetch IP from (e.g., "https://api.ipify.org")
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::from_config(HttpIpSourceConfig {
            url: url.into(),
            ..HttpIpSourceConfig::default()
        })
    }

    /// Create an HTTP IP source from configuration
    pub fn from_config(config: HttpIpSourceConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            url: config.url,
            client,
        })
    }

    /// Fetch current IP from HTTP service
    async fn fetch_ip(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::ip_lookup(&self.url, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::ip_lookup(
                &self.url,
                format!("HTTP error: {}", response.status()),
            ));
        }

        let ip_text = response
            .text()
            .await
            .map_err(|e| Error::ip_lookup(&self.url, format!("failed to read response: {}", e)))?;

        Ok(ip_text.trim().to_string())
    }
}

#[async_trait::async_trait]
impl IpSource for HttpIpSource {
    async fn current(&self) -> Result<String> {
        let ip = self.fetch_ip().await?;
        tracing::debug!("IP service {} answered '{}'", self.url, ip);
        Ok(ip)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
