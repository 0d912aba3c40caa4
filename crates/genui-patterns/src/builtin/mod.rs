// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in UI patterns.
//!
//! Each module contributes one descriptor: metadata, the canonical TSX source
//! (embedded from `templates/`), and props for the demo render.

pub mod action_confirm;
pub mod comparison_table;
pub mod form_wizard;
pub mod info_card;
pub mod metric_card;
pub mod status_tracker;

use crate::registry::{PatternDescriptor, PatternRegistry};

/// Every built-in descriptor, in registration order.
pub fn builtin_patterns() -> Vec<PatternDescriptor> {
    vec![
        metric_card::descriptor(),
        info_card::descriptor(),
        action_confirm::descriptor(),
        status_tracker::descriptor(),
        comparison_table::descriptor(),
        form_wizard::descriptor(),
    ]
}

/// Registers all built-in patterns into the given registry.
pub fn register_builtin_patterns(registry: &mut PatternRegistry) {
    for descriptor in builtin_patterns() {
        registry.register(descriptor);
    }
    tracing::debug!(count = registry.len(), "built-in patterns registered");
}
