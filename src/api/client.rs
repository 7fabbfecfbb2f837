//! Blocking HTTP client for `api.postalpincode.in`.
//!
//! The service is keyless public data: a single unauthenticated GET,
//! path-parameterized by the pincode, returning a JSON array whose first
//! element carries a `Status` field and the post-office list. Transport and
//! parsing are kept separate so response handling is testable on fixture
//! strings without a network.

use reqwest::blocking::Client;
use thiserror::Error;

use crate::models::{LookupResponse, Pincode, PostOfficeRecord};

pub const DEFAULT_BASE_URL: &str = "https://api.postalpincode.in";

/// Failures of a lookup, reduced to the two user-facing messages.
///
/// `NotFound` is a domain-level condition (the service answered, the pincode
/// is unknown). `Transport` covers network failures, non-2xx responses,
/// non-JSON bodies, and unexpected shapes; the underlying detail is kept for
/// diagnostics but the display text stays fixed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Invalid pincode entered.")]
    NotFound,
    #[error("Something went wrong. Please try again.")]
    Transport(String),
}

impl LookupError {
    /// Underlying detail for the transport case, for CLI diagnostics
    pub fn detail(&self) -> Option<&str> {
        match self {
            LookupError::NotFound => None,
            LookupError::Transport(detail) => Some(detail),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PincodeClient {
    base_url: String,
    client: Client,
}

impl PincodeClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default base URL (tests, mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        // The default blocking client imposes a 30s timeout; the lookup call
        // resolves only on network-layer success or failure.
        let client = Client::builder().timeout(None).build().unwrap_or_else(|_| Client::new());
        Self { base_url: base_url.into().trim_end_matches('/').to_string(), client }
    }

    fn url(&self, pincode: &Pincode) -> String {
        format!("{}/pincode/{}", self.base_url, pincode)
    }

    /// Fetch the post-office list for a pincode.
    ///
    /// Returns the (possibly empty) record list on success, `NotFound` when
    /// the service reports the pincode as unknown, and `Transport` for
    /// everything else.
    pub fn lookup(&self, pincode: &Pincode) -> Result<Vec<PostOfficeRecord>, LookupError> {
        let response = self
            .client
            .get(self.url(pincode))
            .send()
            .map_err(|e| LookupError::Transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| LookupError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(LookupError::Transport(format!("HTTP {}: {}", status, body)));
        }

        parse_lookup_body(&body)
    }
}

impl Default for PincodeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a raw response body into the post-office list.
///
/// A missing or `null` `PostOffice` field is treated as an empty list. An
/// empty response array or a malformed body is a transport error.
pub fn parse_lookup_body(body: &str) -> Result<Vec<PostOfficeRecord>, LookupError> {
    let responses: Vec<LookupResponse> = serde_json::from_str(body)
        .map_err(|e| LookupError::Transport(format!("Failed to parse response JSON: {}", e)))?;

    let first = responses
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::Transport("Empty response array".to_string()))?;

    if first.status == "Error" {
        return Err(LookupError::NotFound);
    }

    Ok(first.post_office.unwrap_or_default())
}
