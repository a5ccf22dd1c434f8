//! Capability Resolver
//!
//! Decides once, at construction, whether generation calls go to a real backend
//! or to the local synthesis engine. Two inputs drive the decision: a usable
//! endpoint in configuration, and a backend produced for it by the injected
//! factory. If either is missing every call is served locally for the lifetime
//! of the resolver. Construction never fails.

use crate::backend::http::parse_endpoint;
use crate::backend::{HttpBackend, SharedBackend};
use crate::config::{BackendConfig, BridgeConfig};
use crate::error::BridgeError;
use crate::message::{ChatMessage, GenerationRequest};
use crate::session::ChatSession;
use crate::shape::{ExpectedShape, SynthesisResult};
use crate::synthesis::LocalEngine;
use crate::tool::{RegisteredTool, ToolDefinition};
use std::sync::Arc;
use tracing::{debug, info, info_span, warn, Instrument};

/// Which side serves generation calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityState {
    /// Local synthesis engine
    Local,
    /// Configured remote backend
    Remote,
}

impl CapabilityState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityState::Local => "local",
            CapabilityState::Remote => "remote",
        }
    }
}

/// Routes generation capabilities to the resolved backend
pub struct CapabilityResolver {
    backend: SharedBackend,
    state: CapabilityState,
    endpoint: Option<String>,
}

impl CapabilityResolver {
    /// Resolve from configuration, building the remote side with `factory`.
    ///
    /// The factory is only consulted when a valid endpoint is configured;
    /// returning `None` means the backend is unreachable.
    pub fn resolve<F>(config: &BridgeConfig, factory: F) -> Self
    where
        F: FnOnce(&BackendConfig) -> Option<SharedBackend>,
    {
        let local = || Self::local_engine(config.synthesis.seed);

        let Some(endpoint) = config.backend.configured_endpoint() else {
            info!("No backend endpoint configured; local fallback active");
            return local();
        };

        if let Err(e) = parse_endpoint(endpoint) {
            warn!(endpoint, error = %e, "Unusable backend endpoint; local fallback active");
            return local();
        }

        match factory(&config.backend) {
            Some(backend) => {
                info!(endpoint, backend = backend.backend_name(), "Remote backend active");
                Self {
                    backend,
                    state: CapabilityState::Remote,
                    endpoint: Some(endpoint.to_string()),
                }
            }
            None => {
                warn!(endpoint, "Backend could not be created; local fallback active");
                local()
            }
        }
    }

    /// Resolve from configuration using the HTTP backend.
    pub fn from_config(config: &BridgeConfig) -> Self {
        Self::resolve(config, |backend_config| match HttpBackend::new(backend_config) {
            Ok(backend) => Some(Arc::new(backend) as SharedBackend),
            Err(e) => {
                warn!(error = %e, "Failed to build HTTP backend");
                None
            }
        })
    }

    /// Resolver that always uses the local engine
    pub fn local() -> Self {
        Self::local_engine(None)
    }

    fn local_engine(seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(seed) => LocalEngine::with_seed(seed),
            None => LocalEngine::new(),
        };
        Self {
            backend: Arc::new(engine),
            state: CapabilityState::Local,
            endpoint: None,
        }
    }

    pub fn is_local_fallback_active(&self) -> bool {
        self.state == CapabilityState::Local
    }

    pub fn state(&self) -> CapabilityState {
        self.state
    }

    /// Endpoint in use when remote
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn backend_name(&self) -> &str {
        self.backend.backend_name()
    }

    /// Generate an object matching `shape`.
    ///
    /// Local mode fails with [`BridgeError::UnsupportedContent`] when the prompt
    /// matches no content strategy. Remote errors propagate unchanged.
    pub async fn generate_structured_object(
        &self,
        request: &GenerationRequest,
        shape: &ExpectedShape,
    ) -> Result<SynthesisResult, BridgeError> {
        shape.validate()?;
        let span = info_span!("generate_object", mode = self.state.as_str(), fields = shape.fields.len());
        let result = self
            .backend
            .generate_object(request, shape)
            .instrument(span)
            .await;
        if let Err(e) = &result {
            debug!(error = %e, "Structured generation failed");
        }
        result
    }

    /// Generate unstructured text. Local mode always succeeds.
    pub async fn generate_free_text(&self, request: &GenerationRequest) -> Result<String, BridgeError> {
        let span = info_span!("generate_text", mode = self.state.as_str());
        self.backend.generate_text(request).instrument(span).await
    }

    /// Append `input` and the backend's reply to a copy of `session`.
    ///
    /// On error `session` is left as it was.
    pub async fn send_conversational_message(
        &self,
        session: &ChatSession,
        input: &str,
    ) -> Result<ChatSession, BridgeError> {
        let mut next = session.clone();
        next.push(ChatMessage::user(input));

        let span = info_span!("send_message", mode = self.state.as_str(), turns = next.len());
        let reply = self
            .backend
            .send_message(next.messages())
            .instrument(span)
            .await?;

        next.push(ChatMessage::assistant(reply));
        Ok(next)
    }

    /// Register a tool with the active backend.
    pub fn create_tool(&self, definition: ToolDefinition) -> RegisteredTool {
        self.backend.create_tool(definition)
    }
}
