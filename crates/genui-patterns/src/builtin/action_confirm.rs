// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use genui_core::PatternCategory;
use serde_json::json;

use crate::registry::PatternDescriptor;

pub const ID: &str = "action-confirm";

pub fn descriptor() -> PatternDescriptor {
    PatternDescriptor::new(ID, "Action Confirm", PatternCategory::Action)
        .domains(["booking", "e-commerce", "orders", "travel", "payments", "checkout"])
        .description("Confirmation dialog with details summary and action buttons")
        .source_code(include_str!("../../templates/action-confirm.tsx"))
        .default_props(json!({
            "title": "Confirm Booking",
            "message": "Please review your booking details before confirming.",
            "details": [
                { "label": "Flight", "value": "NYC → LAX" },
                { "label": "Date", "value": "Dec 15, 2024" },
                { "label": "Passengers", "value": "2 Adults" },
                { "label": "Total", "value": "$458.00" }
            ],
            "confirmLabel": "Confirm Booking",
            "cancelLabel": "Cancel",
            "variant": "default"
        }))
}
