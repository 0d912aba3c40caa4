// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use genui_core::PatternCategory;
use serde_json::json;

use crate::registry::PatternDescriptor;

pub const ID: &str = "info-card";

pub fn descriptor() -> PatternDescriptor {
    PatternDescriptor::new(ID, "Info Card", PatternCategory::Card)
        .domains([
            "travel",
            "e-commerce",
            "products",
            "real-estate",
            "hospitality",
            "listings",
        ])
        .description("Rich preview card with image, metadata, and call-to-action")
        .source_code(include_str!("../../templates/info-card.tsx"))
        .default_props(json!({
            "title": "Tropical Paradise Resort",
            "description": "Experience luxury beachfront living with stunning ocean views and world-class amenities.",
            "image": "https://images.unsplash.com/photo-1520250497591-112f2f40a3f4?w=400&h=250&fit=crop",
            "badge": "Featured",
            "metadata": [
                { "label": "Location", "value": "Maldives" },
                { "label": "Rating", "value": "4.9 ★" },
                { "label": "Price", "value": "$299/night" }
            ],
            "actionLabel": "View Details"
        }))
}
