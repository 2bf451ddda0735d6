// # IP Source Trait
//
// Defines the interface for detecting the public IP address to publish.
//
// ## Implementations
//
// - HTTP echo service: `ddns-ip-http` crate
//
// ## Usage
//
// ```rust,ignore
// use ddns_core::IpSource;
//
// #[tokio::main]
// async fn main() -> anyhow::Result<()> {
//     let source = /* IpSource implementation */;
//
//     let candidate = source.current().await?;
//     println!("Public IP: {}", candidate);
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

/// Trait for IP source implementations
///
/// An IP source is asked exactly once per run, and only when no explicit IP
/// was configured.
///
/// # Contract
///
/// - Return the candidate address as text, trimmed of surrounding whitespace
/// - Do NOT validate the address; the updater owns validation
/// - Do NOT retry; a failed lookup is reported as `Error::IpLookupFailed`
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Get the current public IP address
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: The candidate address, trimmed
    /// - `Err(Error)`: If unable to determine the current IP
    async fn current(&self) -> Result<String, crate::Error>;

    /// Where the address comes from (for logging and error messages)
    fn describe(&self) -> String;
}
