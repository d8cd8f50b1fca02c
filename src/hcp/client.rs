//! TFE HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::{api, http};
use crate::error::{Result, TfwsError};
use crate::settings::Credentials;

/// JSON:API error document
#[derive(Deserialize, Debug)]
struct ErrorDocument {
    #[serde(default)]
    errors: Vec<ErrorObject>,
}

/// Single JSON:API error object
#[derive(Deserialize, Debug)]
struct ErrorObject {
    title: Option<String>,
    detail: Option<String>,
}

/// TFE API client
pub struct TfeClient {
    client: Client,
    token: String,
    base_url: String,
}

impl TfeClient {
    /// Create a new TFE client bound to the given credentials
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(http::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(http::REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            token: credentials.token.clone(),
            base_url: credentials.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL for API requests, without a trailing slash
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", api::CONTENT_TYPE)
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a PATCH request builder with standard headers
    pub(crate) fn patch(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.patch(url))
    }

    /// Pass a successful response through, or turn a failed one into the
    /// matching error kind with the server's message attached.
    pub(crate) async fn check_response(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<reqwest::Response> {
        let status = response.status().as_u16();
        if response.status().is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("{} failed with status {}: {}", error_context, status, body);
        let message = format!("{}: {}", error_context, server_message(&body, status));

        Err(match status {
            401 | 403 => TfwsError::Auth { status, message },
            404 => TfwsError::NotFound { status, message },
            422 => TfwsError::Validation { status, message },
            _ => TfwsError::Api { status, message },
        })
    }
}

/// Extract a readable message from an error response body
fn server_message(body: &str, status: u16) -> String {
    if let Ok(doc) = serde_json::from_str::<ErrorDocument>(body) {
        let details: Vec<String> = doc
            .errors
            .into_iter()
            .filter_map(|e| e.detail.or(e.title))
            .collect();
        if !details.is_empty() {
            return details.join("; ");
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("server returned status {}", status)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
impl TfeClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        let credentials = Credentials {
            token: "test-token".to_string(),
            base_url: base_url.to_string(),
        };
        Self::new(&credentials).expect("test client")
    }
}
