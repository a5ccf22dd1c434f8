//! HTTP client for the remote generation service.
//!
//! Routes, relative to the configured endpoint:
//! - `POST agent/chat`  `{messages}` -> `{text}`
//! - `POST text/llm`    `{messages}` -> `{completion}`
//! - `POST object/llm`  `{messages, schema}` -> `{object}`

use super::GenerationBackend;
use crate::config::BackendConfig;
use crate::error::{BackendError, BridgeError};
use crate::message::{ChatMessage, GenerationRequest};
use crate::shape::{ExpectedShape, SynthesisResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct MessagesRequest<'a> {
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    schema: Option<Value>,
}

#[derive(Deserialize)]
struct ChatResponse {
    text: String,
}

#[derive(Deserialize)]
struct TextResponse {
    completion: String,
}

#[derive(Deserialize)]
struct ObjectResponse {
    object: SynthesisResult,
}

// Helper function to map transport errors to BackendError
fn map_http_error(error: reqwest::Error) -> BackendError {
    if error.is_timeout() {
        BackendError::RequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        BackendError::RequestFailed(format!("Connection error: {}", error))
    } else if error.is_decode() {
        BackendError::InvalidResponse(format!("Failed to decode response: {}", error))
    } else {
        BackendError::RequestFailed(format!("HTTP error: {}", error))
    }
}

fn map_status(status: StatusCode, body: String) -> BackendError {
    match status.as_u16() {
        401 | 403 => BackendError::AuthFailed(format!("Authentication failed: {}", body)),
        429 => BackendError::RateLimited(format!("Rate limit exceeded: {}", body)),
        404 => BackendError::NotFound(format!("Route not found: {}", body)),
        _ => BackendError::RequestFailed(format!(
            "Request failed with status {}: {}",
            status, body
        )),
    }
}

/// Parse an endpoint location, accepting only http(s) URLs.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, BridgeError> {
    let trimmed = endpoint.trim();
    // join() replaces the last path segment unless the base ends with '/'
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&normalized)
        .map_err(|e| BridgeError::ConfigError(format!("Invalid backend endpoint '{}': {}", trimmed, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(BridgeError::ConfigError(format!(
            "Unsupported backend endpoint scheme '{}'",
            scheme
        ))),
    }
}

/// Remote generation service client
pub struct HttpBackend {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, BridgeError> {
        let endpoint = config
            .endpoint
            .as_deref()
            .ok_or_else(|| BridgeError::ConfigError("No backend endpoint configured".to_string()))?;
        let base_url = parse_endpoint(endpoint)?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| BridgeError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn post<T: DeserializeOwned>(
        &self,
        route: &str,
        body: &MessagesRequest<'_>,
    ) -> Result<T, BridgeError> {
        let url = self
            .base_url
            .join(route)
            .map_err(|e| BridgeError::ConfigError(format!("Invalid backend route {}: {}", route, e)))?;
        debug!(url = %url, "Backend request");

        let mut request = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await.map_err(map_http_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(map_status(status, error_text).into());
        }

        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::InvalidResponse(format!("Failed to parse response: {}", e)).into())
    }
}

#[async_trait]
impl GenerationBackend for HttpBackend {
    fn backend_name(&self) -> &str {
        "remote"
    }

    async fn send_message(&self, messages: &[ChatMessage]) -> Result<String, BridgeError> {
        let body = MessagesRequest {
            messages,
            schema: None,
        };
        let response: ChatResponse = self.post("agent/chat", &body).await?;
        Ok(response.text)
    }

    async fn generate_object(
        &self,
        request: &GenerationRequest,
        shape: &ExpectedShape,
    ) -> Result<SynthesisResult, BridgeError> {
        let body = MessagesRequest {
            messages: &request.messages,
            schema: Some(shape.to_json_schema()),
        };
        let response: ObjectResponse = self.post("object/llm", &body).await?;
        Ok(response.object)
    }

    async fn generate_text(&self, request: &GenerationRequest) -> Result<String, BridgeError> {
        let body = MessagesRequest {
            messages: &request.messages,
            schema: None,
        };
        let response: TextResponse = self.post("text/llm", &body).await?;
        Ok(response.completion)
    }
}
