// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use genui_core::PatternCategory;
use serde_json::json;

use crate::registry::PatternDescriptor;

pub const ID: &str = "form-wizard";

pub fn descriptor() -> PatternDescriptor {
    PatternDescriptor::new(ID, "Form Wizard", PatternCategory::Form)
        .domains([
            "booking",
            "onboarding",
            "checkout",
            "registration",
            "travel",
            "surveys",
        ])
        .description("Multi-step form with progress indicator and field validation")
        .source_code(include_str!("../../templates/form-wizard.tsx"))
        .default_props(json!({
            "title": "Book Your Trip",
            "steps": [
                {
                    "title": "Destination",
                    "fields": [
                        { "name": "from", "label": "From", "type": "text", "placeholder": "Departure city" },
                        { "name": "to", "label": "To", "type": "text", "placeholder": "Destination city" }
                    ]
                },
                {
                    "title": "Travel Dates",
                    "fields": [
                        { "name": "departure", "label": "Departure", "type": "date" },
                        { "name": "return", "label": "Return", "type": "date" }
                    ]
                },
                {
                    "title": "Travelers",
                    "fields": [
                        { "name": "adults", "label": "Adults", "type": "number", "placeholder": "1" },
                        {
                            "name": "class",
                            "label": "Class",
                            "type": "select",
                            "options": ["Economy", "Business", "First Class"]
                        }
                    ]
                }
            ]
        }))
}
