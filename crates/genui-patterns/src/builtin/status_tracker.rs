// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use genui_core::PatternCategory;
use serde_json::json;

use crate::registry::PatternDescriptor;

pub const ID: &str = "status-tracker";

pub fn descriptor() -> PatternDescriptor {
    PatternDescriptor::new(ID, "Status Tracker", PatternCategory::Status)
        .domains(["orders", "shipping", "logistics", "e-commerce", "delivery", "tracking"])
        .description("Multi-step progress tracker with timestamps and completion states")
        .source_code(include_str!("../../templates/status-tracker.tsx"))
        .default_props(json!({
            "title": "Order Status",
            "currentStep": 2,
            "steps": [
                {
                    "label": "Order Placed",
                    "description": "Your order has been confirmed",
                    "timestamp": "Dec 10, 2:30 PM"
                },
                {
                    "label": "Processing",
                    "description": "Preparing your items",
                    "timestamp": "Dec 10, 4:15 PM"
                },
                {
                    "label": "Shipped",
                    "description": "On the way to you",
                    "timestamp": "Dec 11, 9:00 AM"
                },
                {
                    "label": "Delivered",
                    "description": "Package delivered"
                }
            ]
        }))
}
