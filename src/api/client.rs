//! HTTP client for the forms endpoint
//!
//! One request: `POST {base}/forms` with a JSON body. Any 2xx is success;
//! everything else, including transport errors, is a [`SubmitError`].

use super::payload::ContactPayload;
use super::traits::FormsApi;
use crate::config::FormConfig;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// Why a submission did not succeed. Diagnostic only; never shown to the user.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected submission ({status}): {body}")]
    Status { status: StatusCode, body: String },
    #[error("submission task ended unexpectedly: {0}")]
    Task(String),
}

/// Build the submission URL from a base URL
pub fn forms_endpoint(base_url: &str) -> String {
    format!("{}/forms", base_url.trim_end_matches('/'))
}

/// Client for the forms endpoint
pub struct FormsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl FormsClient {
    /// Create a client from resolved configuration
    pub fn new(config: &FormConfig) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_http(http, &config.api_url))
    }

    /// Create a client around an existing reqwest client
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: forms_endpoint(base_url),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FormsApi for FormsClient {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    async fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        let response = self.http.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SubmitError::Status { status, body });
        }

        tracing::info!(%status, "Contact form submitted");
        Ok(())
    }
}
