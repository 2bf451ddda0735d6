//! Error types for the DDNS updater
//!
//! Every failure aborts the run. Each variant maps to one kind of failure
//! the user can act on, and its `Display` output is the message printed
//! before the process exits.

use std::fmt;
use thiserror::Error;

/// Result type alias for DDNS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Whether credentials were sent with a request the provider rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialState {
    /// Both key and secret were sent, but the provider refused them
    Incorrect,
    /// Key or secret was not supplied, so no authorization header was sent
    Missing,
}

impl fmt::Display for CredentialState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialState::Incorrect => f.write_str("incorrect"),
            CredentialState::Missing => f.write_str("missing"),
        }
    }
}

/// Core error type for the DDNS updater
#[derive(Error, Debug)]
pub enum Error {
    /// Hostname has fewer than three dot-separated labels
    #[error("hostname \"{hostname}\" must be in the form HOST.DOMAIN.TOP")]
    InvalidHostname { hostname: String },

    /// The public IP echo service could not be reached or answered badly
    #[error("Unable to automatically obtain IP address from {url}: {reason}.")]
    IpLookupFailed { url: String, reason: String },

    /// Candidate IP is not four dot-separated integers in 0..=255
    #[error("ip \"{ip}\" is not valid")]
    InvalidIp { ip: String },

    /// HTTP 400
    #[error("Unable to set IP address: {provider} API URL ({url}) was malformed.")]
    BadRequest { provider: &'static str, url: String },

    /// HTTP 401
    #[error(
        "Unable to set IP address: --key or --secret option {credentials}. \
         Correct values can be obtained from {keys_url} and are ideally placed in a % file."
    )]
    Unauthorized {
        credentials: CredentialState,
        keys_url: &'static str,
    },

    /// HTTP 403
    #[error(
        "Unable to set IP address: customer identified by --key and --secret options denied permission. \
         Correct values can be obtained from {keys_url} and are ideally placed in a % file."
    )]
    Forbidden { keys_url: &'static str },

    /// HTTP 404
    #[error("Unable to set IP address: {hostname} not found at {provider}.")]
    NotFound {
        provider: &'static str,
        hostname: String,
    },

    /// HTTP 422
    #[error("Unable to set IP address: \"{hostname}\" has invalid domain or lacks A record.")]
    Unprocessable { hostname: String },

    /// HTTP 429
    #[error(
        "Unable to set IP address: too many requests to {provider} within brief period. \
         Wait a while before trying again."
    )]
    RateLimited { provider: &'static str },

    /// Any other non-2xx status
    #[error("Unable to set IP address: {provider} API failure because \"{reason}\".")]
    Provider {
        provider: &'static str,
        reason: String,
    },

    /// No response was obtained at all (DNS, connect, timeout)
    #[error("Unable to set IP address: {provider} API failure because \"{reason}\".")]
    Transport {
        provider: &'static str,
        reason: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Provider answered 2xx with a body that is not JSON
    #[error("Malformed JSON in API response: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid hostname error
    pub fn invalid_hostname(hostname: impl Into<String>) -> Self {
        Self::InvalidHostname {
            hostname: hostname.into(),
        }
    }

    /// Create an IP lookup error
    pub fn ip_lookup(url: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::IpLookupFailed {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid IP error
    pub fn invalid_ip(ip: impl Into<String>) -> Self {
        Self::InvalidIp { ip: ip.into() }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::Provider {
            provider,
            reason: reason.into(),
        }
    }

    /// Create a transport error
    pub fn transport(provider: &'static str, reason: impl fmt::Display) -> Self {
        Self::Transport {
            provider,
            reason: reason.to_string(),
        }
    }
}
