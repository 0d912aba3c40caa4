// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use genui_core::PatternCategory;
use serde_json::json;

use crate::registry::PatternDescriptor;

pub const ID: &str = "comparison-table";

pub fn descriptor() -> PatternDescriptor {
    PatternDescriptor::new(ID, "Comparison Table", PatternCategory::Visualization)
        .domains(["pricing", "products", "saas", "plans", "features", "comparisons"])
        .description("Side-by-side feature comparison table with highlighting")
        .source_code(include_str!("../../templates/comparison-table.tsx"))
        .default_props(json!({
            "title": "Compare Plans",
            "items": [
                {
                    "name": "Basic",
                    "features": {
                        "price": "$9/mo",
                        "users": "1",
                        "storage": "10GB",
                        "support": false,
                        "api": false
                    }
                },
                {
                    "name": "Pro",
                    "highlight": true,
                    "features": {
                        "price": "$29/mo",
                        "users": "5",
                        "storage": "100GB",
                        "support": true,
                        "api": true
                    }
                },
                {
                    "name": "Enterprise",
                    "features": {
                        "price": "$99/mo",
                        "users": "Unlimited",
                        "storage": "1TB",
                        "support": true,
                        "api": true
                    }
                }
            ],
            "featureLabels": ["price", "users", "storage", "support", "api"]
        }))
}
