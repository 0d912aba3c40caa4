// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use genui_core::PatternCategory;
use serde_json::json;

use crate::registry::PatternDescriptor;

pub const ID: &str = "metric-card";

pub fn descriptor() -> PatternDescriptor {
    PatternDescriptor::new(ID, "Metric Card", PatternCategory::Visualization)
        .domains(["analytics", "dashboard", "finance", "e-commerce", "saas", "admin"])
        .description("Displays a single metric with trend indicator and change percentage")
        .source_code(include_str!("../../templates/metric-card.tsx"))
        .default_props(json!({
            "title": "Total Revenue",
            "value": "$12,450",
            "change": 12.5,
            "trend": "up",
            "icon": "📈",
            "subtitle": "vs last month"
        }))
}
