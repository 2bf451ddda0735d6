//! DNS record model: the target of an update and the JSON sent for it

use crate::error::{Error, Result};
use serde::Serialize;

/// DNS record type
///
/// Only A records are managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecordType {
    /// A record (IPv4)
    A,
}

impl RecordType {
    /// Wire name of the record type
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
        }
    }
}

/// A hostname split into the record name and the domain that owns it
///
/// `sub.example.com` becomes name `sub` and domain `example.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTarget {
    /// Full hostname as given
    pub hostname: String,
    /// First label, used as the record name
    pub name: String,
    /// Remaining labels joined with '.'
    pub domain: String,
}

impl RecordTarget {
    /// Split a hostname into record name and domain
    ///
    /// Fails with [`Error::InvalidHostname`] when the hostname has fewer than
    /// three dot-separated labels (HOST.DOMAIN.TOP).
    pub fn parse(hostname: &str) -> Result<Self> {
        let labels: Vec<&str> = hostname.split('.').collect();
        if labels.len() < 3 {
            return Err(Error::invalid_hostname(hostname));
        }

        Ok(Self {
            hostname: hostname.to_string(),
            name: labels[0].to_string(),
            domain: labels[1..].join("."),
        })
    }
}

/// Check that a candidate is four dot-separated integers, each in 0..=255
///
/// The candidate is not normalized; callers forward it unchanged.
pub fn validate_ipv4(candidate: &str) -> Result<()> {
    let parts: Vec<&str> = candidate.split('.').collect();
    if parts.len() != 4 {
        return Err(Error::invalid_ip(candidate));
    }

    if parts.iter().any(|part| part.parse::<u8>().is_err()) {
        return Err(Error::invalid_ip(candidate));
    }

    Ok(())
}

/// One record entry in the update body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordPayload {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub data: String,
    pub ttl: u32,
}

/// A validated update, ready for a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    /// Record being updated
    pub target: RecordTarget,
    /// Validated IPv4 address, exactly as supplied
    pub ip: String,
    /// TTL to send in the payload
    pub ttl: u32,
}

impl UpdateRequest {
    /// Create a new update request
    pub fn new(target: RecordTarget, ip: impl Into<String>, ttl: u32) -> Self {
        Self {
            target,
            ip: ip.into(),
            ttl,
        }
    }

    /// Record type being updated
    pub fn record_type(&self) -> RecordType {
        RecordType::A
    }

    /// The request body: a single-element list
    pub fn payload(&self) -> Vec<RecordPayload> {
        vec![RecordPayload {
            record_type: self.record_type(),
            name: self.target.hostname.clone(),
            data: self.ip.clone(),
            ttl: self.ttl,
        }]
    }
}
