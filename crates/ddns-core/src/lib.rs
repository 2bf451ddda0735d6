// # ddns-core
//
// Core library for the GoDaddy dynamic DNS updater.
//
// ## Architecture Overview
//
// This library provides the provider-independent part of a single update:
// - **RecordTarget / UpdateRequest**: The record being updated and its payload
// - **IpSource**: Trait for detecting the public IP address
// - **DnsProvider**: Trait for updating a DNS record via a provider API
// - **Updater**: Runs validation → IP resolution → one provider call
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Validation lives here, HTTP lives in the
//    IP source and provider crates
// 2. **Fail Fast**: The first error ends the run, nothing is retried
// 3. **Explicit Configuration**: No global state; everything arrives in
//    `UpdaterConfig`
// 4. **Library-First**: The CLI is a thin layer over `Updater`

pub mod traits;
pub mod updater;
pub mod record;
pub mod config;
pub mod error;

// Re-export core types for convenience
pub use traits::{IpSource, DnsProvider, UpdateResult};
pub use updater::Updater;
pub use record::{RecordPayload, RecordTarget, RecordType, UpdateRequest, validate_ipv4};
pub use config::{Credentials, TtlPolicy, UpdaterConfig, DEFAULT_TTL};
pub use error::{CredentialState, Error, Result};
