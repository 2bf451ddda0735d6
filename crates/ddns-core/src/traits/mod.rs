//! Core traits for the DDNS updater
//!
//! - [`IpSource`]: Detect the public IP address
//! - [`DnsProvider`]: Update a DNS record via a provider API

pub mod ip_source;
pub mod dns_provider;

pub use ip_source::IpSource;
pub use dns_provider::{DnsProvider, UpdateResult};
