//! Test doubles and common utilities for updater contract tests
//!
//! These doubles count calls and record what they were given, so tests can
//! check which network-facing components a run touched.

#![allow(dead_code)]

use ddns_core::error::{Error, Result};
use ddns_core::record::UpdateRequest;
use ddns_core::traits::{DnsProvider, IpSource, UpdateResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An IpSource that returns a fixed answer and counts lookups
pub struct CountingIpSource {
    /// Answer returned by current(), or None to fail
    answer: Option<String>,
    /// Call counter for current()
    call_count: Arc<AtomicUsize>,
}

impl CountingIpSource {
    /// A source that answers with `ip`
    pub fn answering(ip: &str) -> Self {
        Self {
            answer: Some(ip.to_string()),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A source whose lookup always fails
    pub fn failing() -> Self {
        Self {
            answer: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the call counter
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.call_count)
    }
}

#[async_trait::async_trait]
impl IpSource for CountingIpSource {
    async fn current(&self) -> Result<String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match &self.answer {
            Some(ip) => Ok(ip.clone()),
            None => Err(Error::ip_lookup("test://ip-echo", "connection refused")),
        }
    }

    fn describe(&self) -> String {
        "test://ip-echo".to_string()
    }
}

/// A DnsProvider that records every request it receives
pub struct RecordingProvider {
    /// Requests passed to update_record()
    requests: Arc<std::sync::Mutex<Vec<UpdateRequest>>>,
    /// Builds the error to return, or None to succeed
    failure: Option<Box<dyn Fn() -> Error + Send + Sync>>,
}

impl RecordingProvider {
    /// A provider whose updates succeed
    pub fn succeeding() -> Self {
        Self {
            requests: Arc::new(std::sync::Mutex::new(Vec::new())),
            failure: None,
        }
    }

    /// A provider whose updates fail with the error built by `make_error`
    pub fn failing_with(make_error: impl Fn() -> Error + Send + Sync + 'static) -> Self {
        Self {
            requests: Arc::new(std::sync::Mutex::new(Vec::new())),
            failure: Some(Box::new(make_error)),
        }
    }

    /// Shared handle to the recorded requests
    pub fn requests(&self) -> Arc<std::sync::Mutex<Vec<UpdateRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait::async_trait]
impl DnsProvider for RecordingProvider {
    async fn update_record(&self, request: &UpdateRequest) -> Result<UpdateResult> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(make_error) = &self.failure {
            return Err(make_error());
        }

        Ok(UpdateResult::Updated {
            hostname: request.target.hostname.clone(),
            ip: request.ip.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "test"
    }
}

/// Number of calls recorded by a counter
pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
