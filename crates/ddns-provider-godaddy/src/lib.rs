// # GoDaddy DNS Provider
//
// This crate provides the GoDaddy DNS provider for the DDNS updater.
//
// ## Behavior
//
// - Makes ONE HTTP request per update (a PUT to the per-record endpoint)
// - Full error propagation: every non-2xx status maps to a specific `Error`
// - HTTP timeout configured (30 seconds by default)
// - Dry-run mode for safe testing
// - NO retry logic, NO backoff (a failed update ends the run)
//
// ## Security Requirements
//
// - API secret NEVER appears in logs or Debug output
// - Missing credentials are not an error here: the request is sent
//   unauthenticated and GoDaddy answers 401
//
// ## API Reference
//
// - GoDaddy Domains API v1: https://developer.godaddy.com/doc/endpoint/domains
// - Replace records: PUT `/v1/domains/{domain}/records/{type}/{name}`
// - Authorization: `sso-key {key}:{secret}`

use async_trait::async_trait;
use ddns_core::config::validate_http_url;
use ddns_core::traits::{DnsProvider, UpdateResult};
use ddns_core::{CredentialState, Credentials, Error, Result, UpdateRequest};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

/// Display name used in error messages
const PROVIDER_NAME: &str = "GoDaddy";

/// Where customers create production keys
pub const KEYS_URL: &str = "https://developer.godaddy.com/keys/";

/// Production per-record endpoint template
pub const GODADDY_RECORD_ENDPOINT: &str =
    "https://api.godaddy.com/v1/domains/{domain}/records/{type}/{name}";

/// OTE (test environment) per-record endpoint template
pub const GODADDY_OTE_RECORD_ENDPOINT: &str =
    "https://api.ote-godaddy.com/v1/domains/{domain}/records/{type}/{name}";

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// GoDaddy provider configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoDaddyConfig {
    /// URL template with `{domain}`, `{type}` and `{name}` placeholders
    pub record_endpoint: String,

    /// API key and secret; `None` sends the request unauthenticated
    pub credentials: Option<Credentials>,

    /// HTTP timeout
    pub timeout: Duration,

    /// If true, build and log the request but do not send it
    pub dry_run: bool,
}

impl GoDaddyConfig {
    /// Create a production configuration
    pub fn new(credentials: Option<Credentials>) -> Self {
        Self {
            record_endpoint: GODADDY_RECORD_ENDPOINT.to_string(),
            credentials,
            timeout: DEFAULT_HTTP_TIMEOUT,
            dry_run: false,
        }
    }

    /// Validate the provider configuration
    pub fn validate(&self) -> Result<()> {
        validate_http_url("GoDaddy API URL", &self.record_endpoint)?;

        for placeholder in ["{domain}", "{name}"] {
            if !self.record_endpoint.contains(placeholder) {
                return Err(Error::config(format!(
                    "GoDaddy API URL must contain {}. Got: {}",
                    placeholder, self.record_endpoint
                )));
            }
        }

        if self.timeout.is_zero() {
            return Err(Error::config("GoDaddy API timeout must be > 0"));
        }

        Ok(())
    }
}

/// GoDaddy DNS provider
///
/// Stateless and single-shot: one PUT per `update_record` call.
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the API secret.
pub struct GoDaddyProvider {
    /// Per-record endpoint template
    record_endpoint: String,

    /// API credentials
    /// ⚠️ NEVER log the secret
    credentials: Option<Credentials>,

    /// HTTP client for API requests
    client: reqwest::Client,

    /// Dry-run mode: if true, skip the PUT
    dry_run: bool,
}

// Custom Debug implementation that hides the API secret
impl std::fmt::Debug for GoDaddyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoDaddyProvider")
            .field("record_endpoint", &self.record_endpoint)
            .field("credentials", &self.credentials)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

impl GoDaddyProvider {
    /// Create a new GoDaddy provider
    ///
    /// # Returns
    ///
    /// - `Err(Error::Config)` if the endpoint template or timeout is invalid
    pub fn new(config: GoDaddyConfig) -> Result<Self> {
        config.validate()?;

        // A 3xx must surface as a failure, never be followed with the credentials
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        if config.dry_run {
            tracing::warn!("GoDaddy provider running in DRY-RUN mode - no changes will be made");
        }

        Ok(Self {
            record_endpoint: config.record_endpoint,
            credentials: config.credentials,
            client,
            dry_run: config.dry_run,
        })
    }

    /// Substitute the record into the endpoint template
    pub fn record_url(&self, request: &UpdateRequest) -> String {
        self.record_endpoint
            .replace("{domain}", &request.target.domain)
            .replace("{type}", request.record_type().as_str())
            .replace("{name}", &request.target.name)
    }

    /// Value of the Authorization header, when both credentials are present
    fn authorization(&self) -> Option<String> {
        self.credentials
            .as_ref()
            .map(|c| format!("sso-key {}:{}", c.key(), c.secret()))
    }

    /// Map a non-2xx status (and its response body) to the matching error
    fn status_error(
        &self,
        status: StatusCode,
        body: &str,
        url: &str,
        request: &UpdateRequest,
    ) -> Error {
        let hostname = request.target.hostname.clone();

        match status.as_u16() {
            400 => Error::BadRequest {
                provider: PROVIDER_NAME,
                url: url.to_string(),
            },
            401 => Error::Unauthorized {
                credentials: if self.credentials.is_some() {
                    CredentialState::Incorrect
                } else {
                    CredentialState::Missing
                },
                keys_url: KEYS_URL,
            },
            403 => Error::Forbidden { keys_url: KEYS_URL },
            404 => Error::NotFound {
                provider: PROVIDER_NAME,
                hostname,
            },
            422 => Error::Unprocessable { hostname },
            429 => Error::RateLimited {
                provider: PROVIDER_NAME,
            },
            _ => Error::provider(PROVIDER_NAME, failure_reason(status, body)),
        }
    }
}

/// Reason text for an unmapped status
///
/// GoDaddy error bodies look like `{"code":"...","message":"..."}`; the
/// `message` wins, then the raw body, then the HTTP reason phrase, then the
/// numeric status.
fn failure_reason(status: StatusCode, body: &str) -> String {
    let body = body.trim();

    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str(body) {
        if let Some(message) = fields.get("message").and_then(|m| m.as_str()) {
            let message = message.trim();
            if !message.is_empty() {
                return message.to_string();
            }
        }
    }

    if !body.is_empty() {
        return body.to_string();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

#[async_trait]
impl DnsProvider for GoDaddyProvider {
    /// Replace the A record with the request's IP
    ///
    /// # API Call
    ///
    /// ```http
    /// PUT /v1/domains/example.com/records/A/sub
    /// Authorization: sso-key <key>:<secret>
    /// Content-Type: application/json
    /// Accept: application/json
    ///
    /// [{"type":"A","name":"sub.example.com","data":"1.2.3.4","ttl":3600}]
    /// ```
    async fn update_record(&self, request: &UpdateRequest) -> Result<UpdateResult> {
        let url = self.record_url(request);
        let body = serde_json::to_vec(&request.payload())?;

        tracing::info!(
            "Updating GoDaddy DNS record: {} -> {} [mode: {}]",
            request.target.hostname,
            request.ip,
            if self.dry_run { "DRY-RUN" } else { "LIVE" }
        );

        if self.dry_run {
            tracing::info!(
                "[DRY-RUN] Would send PUT request to {} with payload: {}",
                url,
                String::from_utf8_lossy(&body)
            );
            return Ok(UpdateResult::DryRun {
                hostname: request.target.hostname.clone(),
                ip: request.ip.clone(),
                url,
            });
        }

        let mut put = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body);

        match self.authorization() {
            Some(value) => put = put.header(AUTHORIZATION, value),
            None => tracing::warn!("No --key/--secret supplied; sending unauthenticated request"),
        }

        let response = put
            .send()
            .await
            .map_err(|e| Error::transport(PROVIDER_NAME, e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::new());
            tracing::debug!("GoDaddy answered {} for {}: {}", status, url, error_text);
            return Err(self.status_error(status, &error_text, &url, request));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::transport(PROVIDER_NAME, e))?;

        // GoDaddy answers a successful PUT with an empty body
        if !bytes.iter().all(u8::is_ascii_whitespace) {
            let _: serde_json::Value = serde_json::from_slice(&bytes)?;
        }

        tracing::info!(
            "DNS record updated successfully: {} -> {}",
            request.target.hostname,
            request.ip
        );
        Ok(UpdateResult::Updated {
            hostname: request.target.hostname.clone(),
            ip: request.ip.clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "godaddy"
    }
}
