// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent tools for discovering patterns.
//!
//! The chat agent calls these to find a pattern that fits the user's
//! application before showing a card or gallery. Each tool returns a JSON
//! array of pattern summaries; source code and props are left out to keep
//! the payload small.

use std::sync::Arc;

use async_trait::async_trait;
use genui_core::{GenuiError, PatternCategory, Tool, ToolOutput, ToolRegistry};
use serde_json::{json, Value};

use crate::registry::PatternRegistry;

/// Lists every registered pattern.
pub struct ListPatternsTool {
    registry: Arc<PatternRegistry>,
}

impl ListPatternsTool {
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Tool for ListPatternsTool {
    fn name(&self) -> &str {
        "list_patterns"
    }

    fn description(&self) -> &str {
        "List all available UI patterns with their categories, domains, and descriptions"
    }

    fn parameters_schema(&self) -> Value {
        json!({ "type": "object", "properties": {} })
    }

    async fn invoke(&self, _input: Value) -> Result<ToolOutput, GenuiError> {
        let patterns: Vec<Value> = self
            .registry
            .get_all()
            .into_iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "name": p.name,
                    "category": p.category,
                    "domains": p.domains,
                    "description": p.description,
                })
            })
            .collect();
        Ok(ToolOutput::ok(Value::Array(patterns)))
    }
}

/// Finds patterns whose domain tags match a use case (e.g. "travel").
pub struct SearchByDomainTool {
    registry: Arc<PatternRegistry>,
}

impl SearchByDomainTool {
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Tool for SearchByDomainTool {
    fn name(&self) -> &str {
        "search_patterns_by_domain"
    }

    fn description(&self) -> &str {
        "Find UI patterns suited to an application domain such as travel, e-commerce, or analytics"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "domain": {
                    "type": "string",
                    "description": "Domain or use case to search for"
                }
            },
            "required": ["domain"]
        })
    }

    async fn invoke(&self, input: Value) -> Result<ToolOutput, GenuiError> {
        let domain = required_str(&input, "domain")?;
        let patterns: Vec<Value> = self
            .registry
            .search_by_domain(domain)
            .into_iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "name": p.name,
                    "category": p.category,
                    "description": p.description,
                })
            })
            .collect();
        tracing::debug!(domain, matches = patterns.len(), "domain search");
        Ok(ToolOutput::ok(Value::Array(patterns)))
    }
}

/// Lists the patterns of one category.
pub struct SearchByCategoryTool {
    registry: Arc<PatternRegistry>,
}

impl SearchByCategoryTool {
    pub fn new(registry: Arc<PatternRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl Tool for SearchByCategoryTool {
    fn name(&self) -> &str {
        "search_patterns_by_category"
    }

    fn description(&self) -> &str {
        "List UI patterns in a category: visualization, form, card, action, or status"
    }

    fn parameters_schema(&self) -> Value {
        let categories: Vec<&str> = {
            use strum::IntoEnumIterator;
            PatternCategory::iter().map(|c| c.as_str()).collect()
        };
        json!({
            "type": "object",
            "properties": {
                "category": {
                    "type": "string",
                    "enum": categories,
                    "description": "Pattern category"
                }
            },
            "required": ["category"]
        })
    }

    async fn invoke(&self, input: Value) -> Result<ToolOutput, GenuiError> {
        let raw = required_str(&input, "category")?;
        let Ok(category) = raw.parse::<PatternCategory>() else {
            return Ok(ToolOutput::error(format!(
                "Unknown category '{raw}'. Valid categories: {}",
                PatternCategory::valid_names()
            )));
        };

        let patterns: Vec<Value> = self
            .registry
            .get_by_category(category)
            .into_iter()
            .map(|p| {
                json!({
                    "id": p.id,
                    "name": p.name,
                    "domains": p.domains,
                    "description": p.description,
                })
            })
            .collect();
        Ok(ToolOutput::ok(Value::Array(patterns)))
    }
}

fn required_str<'a>(input: &'a Value, key: &str) -> Result<&'a str, GenuiError> {
    input[key]
        .as_str()
        .ok_or_else(|| GenuiError::InvalidInput(format!("missing required '{key}' parameter")))
}

/// Registers the three discovery tools, all sharing `registry`.
pub fn register_discovery_tools(tools: &mut ToolRegistry, registry: &Arc<PatternRegistry>) {
    tools.register(Arc::new(ListPatternsTool::new(Arc::clone(registry))));
    tools.register(Arc::new(SearchByDomainTool::new(Arc::clone(registry))));
    tools.register(Arc::new(SearchByCategoryTool::new(Arc::clone(registry))));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Arc<PatternRegistry> {
        Arc::new(PatternRegistry::with_builtin_patterns())
    }

    #[tokio::test]
    async fn list_patterns_returns_all_summaries() {
        let tool = ListPatternsTool::new(registry());
        let out = tool.invoke(json!({})).await.unwrap();
        assert!(!out.is_error);
        let items = out.content.as_array().unwrap();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0]["id"], "metric-card");
        assert_eq!(items[0]["category"], "visualization");
        assert!(items[0]["domains"].is_array());
        assert!(items[0].get("sourceCode").is_none());
    }

    #[tokio::test]
    async fn domain_search_omits_domains_field() {
        let tool = SearchByDomainTool::new(registry());
        let out = tool.invoke(json!({ "domain": "Shipping" })).await.unwrap();
        let items = out.content.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "status-tracker");
        assert!(items[0].get("domains").is_none());
    }

    #[tokio::test]
    async fn domain_search_requires_domain() {
        let tool = SearchByDomainTool::new(registry());
        let err = tool.invoke(json!({})).await.unwrap_err();
        assert!(matches!(err, GenuiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn category_search_is_case_insensitive() {
        let tool = SearchByCategoryTool::new(registry());
        let out = tool.invoke(json!({ "category": "FORM" })).await.unwrap();
        let items = out.content.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "form-wizard");
        assert!(items[0].get("category").is_none());
    }

    #[tokio::test]
    async fn unknown_category_is_a_tool_error() {
        let tool = SearchByCategoryTool::new(registry());
        let out = tool.invoke(json!({ "category": "chart" })).await.unwrap();
        assert!(out.is_error);
        let msg = out.content["error"].as_str().unwrap();
        assert!(msg.contains("chart"));
        assert!(msg.contains("visualization, form, card, action, status"));
    }

    #[test]
    fn registers_three_tools() {
        let mut tools = ToolRegistry::new();
        register_discovery_tools(&mut tools, &registry());
        let names: Vec<Value> = tools
            .tool_definitions()
            .into_iter()
            .map(|d| d["name"].clone())
            .collect();
        assert_eq!(
            names,
            vec!["list_patterns", "search_patterns_by_category", "search_patterns_by_domain"]
        );
    }
}
