// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and registry for agent-facing operations.
//!
//! The chat agent discovers patterns and requests images through tools. The
//! [`Tool`] trait is the uniform interface; the [`ToolRegistry`] indexes tools
//! by name and produces the JSON definitions handed to the model.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GenuiError;

/// Output from a tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// JSON payload returned to the agent.
    pub content: serde_json::Value,
    /// Whether the invocation failed in a way the agent should see.
    pub is_error: bool,
}

impl ToolOutput {
    /// A successful output.
    pub fn ok(content: serde_json::Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    /// An error output carrying a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: serde_json::json!({ "error": message.into() }),
            is_error: true,
        }
    }
}

/// Unified trait for every agent tool.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name (used for lookup and routing).
    fn name(&self) -> &str;

    /// What the tool does, phrased for the model.
    fn description(&self) -> &str;

    /// JSON Schema of the tool input.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Invokes the tool with JSON input.
    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, GenuiError>;
}

/// Registry of available tools, indexed by name.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool under its `name()`. A later tool with the same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Invokes the tool registered as `name`.
    ///
    /// Unknown names yield [`GenuiError::NotFound`] with kind `"tool"`.
    pub async fn invoke(
        &self,
        name: &str,
        input: serde_json::Value,
    ) -> Result<ToolOutput, GenuiError> {
        let tool = self.tools.get(name).ok_or_else(|| GenuiError::NotFound {
            kind: "tool",
            id: name.to_string(),
        })?;
        tool.invoke(input).await
    }

    /// Returns tool definitions sorted by name.
    ///
    /// Each definition has the shape:
    /// ```json
    /// {
    ///   "name": "tool_name",
    ///   "description": "What the tool does",
    ///   "input_schema": { ... JSON Schema ... }
    /// }
    /// ```
    pub fn tool_definitions(&self) -> Vec<serde_json::Value> {
        let mut tools: Vec<&Arc<dyn Tool>> = self.tools.values().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name(),
                    "description": t.description(),
                    "input_schema": t.parameters_schema(),
                })
            })
            .collect()
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes the input back"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({
                "type": "object",
                "properties": {
                    "message": { "type": "string" }
                },
                "required": ["message"]
            })
        }

        async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, GenuiError> {
            Ok(ToolOutput::ok(input["message"].clone()))
        }
    }

    struct CountTool;

    #[async_trait]
    impl Tool for CountTool {
        fn name(&self) -> &str {
            "count"
        }

        fn description(&self) -> &str {
            "Counts characters"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({ "type": "object", "properties": {} })
        }

        async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, GenuiError> {
            let n = input["text"].as_str().map(|s| s.chars().count()).unwrap_or(0);
            Ok(ToolOutput::ok(serde_json::json!(n)))
        }
    }

    #[test]
    fn registers_and_retrieves_tools() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));

        let tool = registry.get("echo").expect("echo registered");
        assert_eq!(tool.name(), "echo");
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn definitions_are_sorted_by_name() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        registry.register(Arc::new(CountTool));

        let names: Vec<serde_json::Value> = registry
            .tool_definitions()
            .into_iter()
            .map(|d| d["name"].clone())
            .collect();
        assert_eq!(names, vec!["count", "echo"]);
    }

    #[tokio::test]
    async fn invoking_unknown_tool_is_not_found() {
        let registry = ToolRegistry::new();
        let err = registry
            .invoke("ghost", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenuiError::NotFound { kind: "tool", ref id } if id == "ghost"
        ));
        assert_eq!(err.to_string(), "tool not found: ghost");
    }

    #[test]
    fn tool_definitions_carry_schema() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));

        let defs = registry.tool_definitions();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0]["name"], "echo");
        assert_eq!(defs[0]["input_schema"]["type"], "object");
        assert!(defs[0]["input_schema"]["properties"]["message"].is_object());
    }

    #[test]
    fn empty_registry() {
        let registry = ToolRegistry::default();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.tool_definitions().is_empty());
    }

    #[tokio::test]
    async fn invoke_through_registry() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool));
        registry.register(Arc::new(CountTool));

        let out = registry
            .invoke("echo", serde_json::json!({ "message": "hi" }))
            .await
            .unwrap();
        assert!(!out.is_error);
        assert_eq!(out.content, "hi");

        let out = registry
            .invoke("count", serde_json::json!({ "text": "hello" }))
            .await
            .unwrap();
        assert_eq!(out.content, 5);
    }

    #[test]
    fn error_output_wraps_message() {
        let out = ToolOutput::error("boom");
        assert!(out.is_error);
        assert_eq!(out.content["error"], "boom");
    }
}
