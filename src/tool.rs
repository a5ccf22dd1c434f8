//! Tool registration
//!
//! Real backends accept tool definitions alongside conversations. The local
//! engine never calls tools, so registration only echoes the definition back
//! tagged with the backend that accepted it.

use crate::shape::ExpectedShape;
use serde::{Deserialize, Serialize};

/// A tool the caller wants the backend to be able to invoke
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ExpectedShape>,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: None,
        }
    }

    pub fn with_parameters(mut self, parameters: ExpectedShape) -> Self {
        self.parameters = Some(parameters);
        self
    }
}

/// Handle returned by tool registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredTool {
    pub definition: ToolDefinition,
    pub backend: String,
}
