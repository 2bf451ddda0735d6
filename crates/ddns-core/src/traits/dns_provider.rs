// # DNS Provider Trait
//
// Defines the interface for updating a DNS record via a provider API.
//
// ## Implementations
//
// - GoDaddy: `ddns-provider-godaddy` crate
//
// ## Usage
//
// ```rust,ignore
// use ddns_core::{DnsProvider, RecordTarget, UpdateRequest};
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let provider = /* DnsProvider implementation */;
//
//     let target = RecordTarget::parse("sub.example.com")?;
//     let request = UpdateRequest::new(target, "1.2.3.4", 3600);
//     let result = provider.update_record(&request).await?;
//     println!("{}", result);
//
//     Ok(())
// }
// ```

use crate::record::UpdateRequest;
use async_trait::async_trait;
use std::fmt;

/// Result of a DNS update operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateResult {
    /// Record was successfully updated
    Updated {
        /// The updated hostname
        hostname: String,
        /// The IP address now published
        ip: String,
    },
    /// Request was built but not sent
    DryRun {
        /// The hostname that would be updated
        hostname: String,
        /// The IP address that would be published
        ip: String,
        /// The endpoint the request would go to
        url: String,
    },
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateResult::Updated { hostname, ip } => {
                write!(f, "IP address for {} set to {}.", hostname, ip)
            }
            UpdateResult::DryRun { hostname, ip, url } => write!(
                f,
                "[DRY-RUN] IP address for {} would be set to {} via {}.",
                hostname, ip, url
            ),
        }
    }
}

/// Trait for DNS provider implementations
///
/// # Contract
///
/// - Make exactly ONE update request per call
/// - No retry logic or backoff: return the error and let the run fail
/// - Map provider HTTP statuses onto the matching `Error` variants
/// - Never log credentials
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Set the record described by `request` to its IP address
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateResult)`: The result of the update operation
    /// - `Err(Error)`: If the update failed
    async fn update_record(&self, request: &UpdateRequest) -> Result<UpdateResult, crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
