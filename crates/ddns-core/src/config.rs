//! Configuration types for the DDNS updater
//!
//! Everything a run needs is passed in explicitly; there is no global state.

use std::fmt;

/// TTL sent to the provider unless the ttl is forwarded
pub const DEFAULT_TTL: u32 = 3600;

/// Which TTL ends up in the update payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TtlPolicy {
    /// Always send [`DEFAULT_TTL`], ignoring the configured ttl
    #[default]
    Fixed,
    /// Send the configured ttl
    Forward,
}

/// Main updater configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    /// Fully-qualified hostname owning the A record
    pub hostname: String,

    /// Explicit IP; auto-detected when `None`
    pub ip: Option<String>,

    /// Configured TTL
    pub ttl: u32,

    /// Whether `ttl` is forwarded into the payload
    pub ttl_policy: TtlPolicy,
}

impl UpdaterConfig {
    /// Create a new configuration with defaults
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ip: None,
            ttl: DEFAULT_TTL,
            ttl_policy: TtlPolicy::default(),
        }
    }

    /// Set an explicit IP; an empty string means auto-detect
    pub fn with_ip(mut self, ip: Option<String>) -> Self {
        self.ip = ip.filter(|ip| !ip.is_empty());
        self
    }

    /// Set the configured ttl
    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the ttl policy
    pub fn with_ttl_policy(mut self, ttl_policy: TtlPolicy) -> Self {
        self.ttl_policy = ttl_policy;
        self
    }

    /// The ttl that goes into the request body
    pub fn payload_ttl(&self) -> u32 {
        match self.ttl_policy {
            TtlPolicy::Fixed => DEFAULT_TTL,
            TtlPolicy::Forward => self.ttl,
        }
    }
}

/// Provider API key and secret
///
/// The Debug implementation does NOT expose the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    /// Create credentials from a key and secret
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Build credentials only when both parts are present and non-empty
    pub fn from_parts(key: Option<String>, secret: Option<String>) -> Option<Self> {
        match (key, secret) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                Some(Self::new(key, secret))
            }
            _ => None,
        }
    }

    /// API key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// API secret
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<REDACTED>")
            .finish()
    }
}

/// Check that a URL uses an http or https scheme
pub fn validate_http_url(what: &str, url: &str) -> Result<(), crate::Error> {
    if url.is_empty() {
        return Err(crate::Error::config(format!("{what} cannot be empty")));
    }

    if !url.starts_with("https://") && !url.starts_with("http://") {
        return Err(crate::Error::config(format!(
            "{what} must use HTTP or HTTPS scheme. Got: {url}"
        )));
    }

    Ok(())
}
