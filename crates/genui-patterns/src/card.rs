// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pattern card views: a descriptor plus the props a demo should render with.

use genui_core::PatternCategory;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::registry::{json_kind, PatternDescriptor, PatternRegistry};

/// Picks the props for a demo render.
///
/// A `mock_data_json` override that parses to a JSON object replaces the
/// defaults wholesale (no merge). Anything else falls back to the defaults.
pub fn resolve_props(descriptor: &PatternDescriptor, mock_data_json: Option<&str>) -> Map<String, Value> {
    let Some(raw) = mock_data_json else {
        return descriptor.default_props.clone();
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(props)) => props,
        Ok(other) => {
            tracing::debug!(
                pattern = %descriptor.id,
                kind = json_kind(&other),
                "mock data is not an object, using defaults"
            );
            descriptor.default_props.clone()
        }
        Err(e) => {
            tracing::debug!(pattern = %descriptor.id, error = %e, "mock data is not valid JSON, using defaults");
            descriptor.default_props.clone()
        }
    }
}

/// A pattern ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: PatternCategory,
    pub props: Map<String, Value>,
    pub source_code: String,
    /// File name shown above the source, e.g. `Metric Card.tsx`.
    pub source_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Result of rendering a card by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PatternCardView {
    Found(PatternCard),
    #[serde(rename_all = "camelCase")]
    Missing { pattern_id: String, message: String },
}

impl PatternCardView {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Builds the card view for `pattern_id`.
pub fn render_card(
    registry: &PatternRegistry,
    pattern_id: &str,
    mock_data_json: Option<&str>,
    explanation: Option<&str>,
) -> PatternCardView {
    let Some(descriptor) = registry.get_by_id(pattern_id) else {
        return PatternCardView::Missing {
            pattern_id: pattern_id.to_string(),
            message: format!("Pattern \"{pattern_id}\" not found"),
        };
    };

    PatternCardView::Found(PatternCard {
        id: descriptor.id.clone(),
        name: descriptor.name.clone(),
        description: descriptor.description.clone(),
        category: descriptor.category,
        props: resolve_props(descriptor, mock_data_json),
        source_code: descriptor.source_code.clone(),
        source_title: format!("{}.tsx", descriptor.name),
        explanation: explanation.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;

    fn registry() -> PatternRegistry {
        let mut registry = PatternRegistry::new();
        registry.register(
            PatternDescriptor::new("metric-card", "Metric Card", PatternCategory::Visualization)
                .description("Displays a metric")
                .source_code("export function MetricCard() {}")
                .default_props(json!({ "title": "Total Revenue", "value": "$12,450" })),
        );
        registry
    }

    #[test]
    fn no_override_uses_defaults() {
        let r = registry();
        let d = r.get_by_id("metric-card").unwrap();
        assert_eq!(resolve_props(d, None), d.default_props);
    }

    #[test]
    fn object_override_replaces_defaults_wholesale() {
        let r = registry();
        let d = r.get_by_id("metric-card").unwrap();
        let props = resolve_props(d, Some(r#"{"title":"Active Users"}"#));
        assert_eq!(props.get("title"), Some(&json!("Active Users")));
        assert!(props.get("value").is_none(), "override must not merge with defaults");
    }

    #[traced_test]
    #[test]
    fn malformed_override_falls_back_silently() {
        let r = registry();
        let d = r.get_by_id("metric-card").unwrap();
        assert_eq!(resolve_props(d, Some("{not json")), d.default_props);
        assert!(logs_contain("mock data is not valid JSON"));
    }

    #[test]
    fn non_object_override_falls_back() {
        let r = registry();
        let d = r.get_by_id("metric-card").unwrap();
        assert_eq!(resolve_props(d, Some("[1,2]")), d.default_props);
        assert_eq!(resolve_props(d, Some("\"text\"")), d.default_props);
    }

    #[test]
    fn render_card_found() {
        let r = registry();
        let view = render_card(&r, "metric-card", None, Some("Shows revenue at a glance"));
        let PatternCardView::Found(card) = view else {
            panic!("expected a card");
        };
        assert_eq!(card.name, "Metric Card");
        assert_eq!(card.source_title, "Metric Card.tsx");
        assert_eq!(card.explanation.as_deref(), Some("Shows revenue at a glance"));
        assert_eq!(card.props.get("title"), Some(&json!("Total Revenue")));
    }

    #[test]
    fn render_card_missing() {
        let view = render_card(&registry(), "nope", None, None);
        assert!(!view.is_found());
        assert_eq!(
            view,
            PatternCardView::Missing {
                pattern_id: "nope".into(),
                message: "Pattern \"nope\" not found".into(),
            }
        );
    }

    #[test]
    fn card_view_json_shape() {
        let found = serde_json::to_value(render_card(&registry(), "metric-card", None, None)).unwrap();
        assert_eq!(found["status"], "found");
        assert_eq!(found["category"], "visualization");
        assert_eq!(found["sourceTitle"], "Metric Card.tsx");
        assert!(found.get("explanation").is_none());

        let missing = serde_json::to_value(render_card(&registry(), "x", None, None)).unwrap();
        assert_eq!(missing["status"], "missing");
        assert_eq!(missing["patternId"], "x");
    }
}
