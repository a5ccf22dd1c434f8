//! Error types for the AI bridge.

use thiserror::Error;

/// Errors raised by a real (remote) generation backend.
///
/// These are surfaced to callers unchanged; the bridge never retries them.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Backend authentication failed: {0}")]
    AuthFailed(String),

    #[error("Backend rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Backend route not found: {0}")]
    NotFound(String),

    #[error("Backend request failed: {0}")]
    RequestFailed(String),

    #[error("Backend returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors surfaced by the bridge to its callers
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The prompt matched no local content strategy and no real backend is available.
    #[error("{0}")]
    UnsupportedContent(String),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Generation produced an empty result")]
    EmptyGenerationResult,

    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("No value can be produced for required field '{0}'")]
    UnproducibleField(String),

    #[error("Field '{field}' expected {expected}, got {actual}")]
    ShapeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BridgeError {
    /// Message shown to users when the local engine cannot serve a request.
    pub fn unsupported_content() -> Self {
        BridgeError::UnsupportedContent(
            "O motor de IA local não consegue gerar este tipo de conteúdo. \
             Ative o serviço de IA real para continuar."
                .to_string(),
        )
    }
}

impl From<config::ConfigError> for BridgeError {
    fn from(err: config::ConfigError) -> Self {
        BridgeError::ConfigError(err.to_string())
    }
}
