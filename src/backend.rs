//! Generation Backend Abstraction
//!
//! Uniform interface over the real AI service and the local synthesis engine.
//! Both expose the same four capabilities: conversational messaging,
//! structured-object generation, free-text generation and tool registration.

use crate::error::BridgeError;
use crate::message::{ChatMessage, GenerationRequest};
use crate::shape::{ExpectedShape, SynthesisResult};
use crate::tool::{RegisteredTool, ToolDefinition};
use async_trait::async_trait;
use std::sync::Arc;

pub mod http;

pub use http::HttpBackend;

/// Generation backend trait
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Short name used in logs and status output
    fn backend_name(&self) -> &str;

    /// Reply to a running conversation
    async fn send_message(&self, messages: &[ChatMessage]) -> Result<String, BridgeError>;

    /// Produce an object matching `shape`
    async fn generate_object(
        &self,
        request: &GenerationRequest,
        shape: &ExpectedShape,
    ) -> Result<SynthesisResult, BridgeError>;

    /// Produce unstructured text
    async fn generate_text(&self, request: &GenerationRequest) -> Result<String, BridgeError>;

    /// Register a tool. The default accepts the definition without side effects.
    fn create_tool(&self, definition: ToolDefinition) -> RegisteredTool {
        RegisteredTool {
            definition,
            backend: self.backend_name().to_string(),
        }
    }
}

/// Shared backend handle
pub type SharedBackend = Arc<dyn GenerationBackend>;
