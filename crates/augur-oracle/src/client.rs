//! Completion clients.

use std::future::Future;

use tracing::debug;

use crate::config::OracleConfig;
use crate::error::{OracleError, OracleResult};
use crate::wire::{CompletionRequest, CompletionResponse};

/// Something that can answer a completion request.
///
/// Implementations are shared with the request task, so they must be
/// thread-safe and own their state.
pub trait CompletionClient: Send + Sync + 'static {
    /// Send one request and return the parsed response.
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = OracleResult<CompletionResponse>> + Send;
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpCompletionClient {
    /// Create a client with a default HTTP stack.
    pub fn new(config: &OracleConfig) -> Self {
        Self::with_http(config, reqwest::Client::new())
    }

    /// Create a client on top of an existing `reqwest::Client`.
    pub fn with_http(config: &OracleConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        }
    }

    /// The URL requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> OracleResult<CompletionResponse> {
        debug!(endpoint = %self.endpoint, model = %request.model, "posting completion request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
