// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `genui patterns` command implementation.

use clap::Args;
use genui_core::{GenuiError, PatternCategory};
use genui_patterns::{PatternDescriptor, PatternRegistry};

/// Filters for `genui patterns`. Given filters are combined with AND.
#[derive(Args, Debug, Default)]
pub struct PatternsArgs {
    /// Only patterns in this category.
    #[arg(long)]
    pub category: Option<String>,
    /// Free-text search over name, description, domains and category.
    #[arg(long)]
    pub search: Option<String>,
    /// Only patterns suited to this domain (e.g. travel).
    #[arg(long)]
    pub domain: Option<String>,
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Runs the `genui patterns` command against the built-in registry.
pub fn run_patterns(args: &PatternsArgs) -> Result<(), GenuiError> {
    let registry = PatternRegistry::with_builtin_patterns();
    let selected = select_patterns(&registry, args)?;

    if args.json {
        let json = serde_json::to_string_pretty(&selected)
            .map_err(|e| GenuiError::Internal(format!("failed to encode patterns: {e}")))?;
        println!("{json}");
        return Ok(());
    }

    if selected.is_empty() {
        println!("No patterns match.");
        return Ok(());
    }
    for p in selected {
        println!("{:<18} {:<14} {}", p.id, p.category, p.name);
        println!("{:<18} {}", "", p.description);
        println!("{:<18} domains: {}", "", p.domains.join(", "));
    }
    Ok(())
}

/// Applies the filters in `args`, keeping registration order.
pub fn select_patterns<'a>(
    registry: &'a PatternRegistry,
    args: &PatternsArgs,
) -> Result<Vec<&'a PatternDescriptor>, GenuiError> {
    let mut selected = match &args.category {
        Some(raw) => {
            let category = raw.parse::<PatternCategory>().map_err(|_| {
                GenuiError::InvalidInput(format!(
                    "unknown category '{raw}' (expected one of: {})",
                    PatternCategory::valid_names()
                ))
            })?;
            registry.get_by_category(category)
        }
        None => registry.get_all(),
    };

    if let Some(domain) = &args.domain {
        let matches = registry.search_by_domain(domain);
        selected.retain(|p| matches.iter().any(|m| m.id == p.id));
    }
    if let Some(term) = &args.search {
        let matches = registry.search(term);
        selected.retain(|p| matches.iter().any(|m| m.id == p.id));
    }
    Ok(selected)
}
