//! Core DDNS updater
//!
//! The Updater runs one update from start to finish:
//! - Validating the hostname
//! - Resolving the IP (explicit, or via IpSource)
//! - Validating the IP
//! - Handing a single UpdateRequest to the DnsProvider
//!
//! ## Flow
//!
//! ```text
//! hostname ──▶ RecordTarget::parse ──┐
//!                                    │
//! --ip / IpSource ──▶ validate_ipv4 ─┼──▶ UpdateRequest ──▶ DnsProvider
//!                                    │
//! ttl policy ────────────────────────┘
//! ```
//!
//! The first failure ends the run. Nothing is retried.

use crate::config::UpdaterConfig;
use crate::error::{Error, Result};
use crate::record::{RecordTarget, UpdateRequest, validate_ipv4};
use crate::traits::{DnsProvider, IpSource, UpdateResult};
use tracing::{debug, info};

/// Single-shot DDNS updater
pub struct Updater {
    /// Run configuration
    config: UpdaterConfig,

    /// IP source, consulted only without an explicit IP
    ip_source: Box<dyn IpSource>,

    /// DNS provider for updating the record
    provider: Box<dyn DnsProvider>,
}

impl Updater {
    /// Create a new updater
    ///
    /// # Parameters
    ///
    /// - `config`: Run configuration
    /// - `ip_source`: IP source used when `config.ip` is `None`
    /// - `provider`: DNS provider implementation
    pub fn new(
        config: UpdaterConfig,
        ip_source: Box<dyn IpSource>,
        provider: Box<dyn DnsProvider>,
    ) -> Self {
        Self {
            config,
            ip_source,
            provider,
        }
    }

    /// Run the update
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateResult)`: The record was updated (or would be, in dry-run)
    /// - `Err(Error)`: The first failure encountered
    pub async fn run(&self) -> Result<UpdateResult> {
        let target = RecordTarget::parse(&self.config.hostname)?;
        debug!(
            "Record name '{}' in domain '{}'",
            target.name, target.domain
        );

        let ip = self.resolve_ip().await?;
        validate_ipv4(&ip)?;

        let request = UpdateRequest::new(target, ip, self.config.payload_ttl());
        info!(
            "Updating {} -> {} via {}",
            request.target.hostname,
            request.ip,
            self.provider.provider_name()
        );

        self.provider.update_record(&request).await
    }

    /// Use the configured IP, or ask the IP source once
    async fn resolve_ip(&self) -> Result<String> {
        if let Some(ip) = self.config.ip.as_deref() {
            debug!("Using explicit IP {}", ip);
            return Ok(ip.to_string());
        }

        let source = self.ip_source.describe();
        debug!("Looking up public IP from {}", source);

        let ip = self
            .ip_source
            .current()
            .await
            .map_err(|e| match e {
                Error::IpLookupFailed { .. } => e,
                other => Error::ip_lookup(source.clone(), other),
            })?
            .trim()
            .to_string();

        info!("Detected public IP {} from {}", ip, source);
        Ok(ip)
    }
}
