// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pattern descriptors and the registry that indexes them.
//!
//! The registry is built once at startup (see
//! [`PatternRegistry::with_builtin_patterns`]) and then shared read-only, usually
//! behind an `Arc`. Lookups are by id; discovery is by category, domain tag,
//! or free text. Matching is plain case-insensitive substring search, not
//! ranked.

use std::collections::HashMap;

use genui_core::PatternCategory;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata, canonical source and demo data for one UI pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDescriptor {
    /// Stable unique key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Pattern category.
    pub category: PatternCategory,
    /// Application contexts the pattern suits (e.g. `travel`).
    pub domains: Vec<String>,
    /// One-line summary.
    pub description: String,
    /// Canonical TSX implementation shown to users.
    pub source_code: String,
    /// Props used to render the demo when no override is given.
    pub default_props: Map<String, Value>,
}

impl PatternDescriptor {
    /// Starts a descriptor with the required identity fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: PatternCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            domains: Vec::new(),
            description: String::new(),
            source_code: String::new(),
            default_props: Map::new(),
        }
    }

    pub fn domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = domains.into_iter().map(Into::into).collect();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn source_code(mut self, source_code: impl Into<String>) -> Self {
        self.source_code = source_code.into();
        self
    }

    /// Sets the default props. Anything other than a JSON object is ignored.
    pub fn default_props(mut self, props: Value) -> Self {
        match props {
            Value::Object(map) => self.default_props = map,
            other => tracing::warn!(
                pattern = %self.id,
                kind = json_kind(&other),
                "default props must be a JSON object, ignoring"
            ),
        }
        self
    }

    /// True if `needle` (already lowercased) occurs in the name, description,
    /// category, or any domain tag.
    fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .domains
                .iter()
                .any(|d| d.to_lowercase().contains(needle))
            || self.category.as_str().contains(needle)
    }

    /// True if `term` (already lowercased) and some domain tag contain one another.
    fn matches_domain(&self, term: &str) -> bool {
        self.domains.iter().any(|d| {
            let tag = d.to_lowercase();
            tag.contains(term) || term.contains(tag.as_str())
        })
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Keyed store of pattern descriptors.
///
/// Iteration order is registration order. Re-registering an id replaces the
/// descriptor in place and keeps its original position.
#[derive(Debug, Default)]
pub struct PatternRegistry {
    patterns: HashMap<String, PatternDescriptor>,
    order: Vec<String>,
}

impl PatternRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry populated with the built-in patterns.
    pub fn with_builtin_patterns() -> Self {
        let mut registry = Self::new();
        crate::builtin::register_builtin_patterns(&mut registry);
        registry
    }

    /// Inserts `descriptor`, replacing any existing descriptor with the same id.
    pub fn register(&mut self, descriptor: PatternDescriptor) {
        let id = descriptor.id.clone();
        match self.patterns.insert(id.clone(), descriptor) {
            Some(_) => tracing::warn!(pattern = %id, "pattern re-registered, replacing previous descriptor"),
            None => {
                tracing::debug!(pattern = %id, "pattern registered");
                self.order.push(id);
            }
        }
    }

    /// Looks up a descriptor by id.
    pub fn get_by_id(&self, id: &str) -> Option<&PatternDescriptor> {
        self.patterns.get(id)
    }

    /// All descriptors, in registration order.
    pub fn get_all(&self) -> Vec<&PatternDescriptor> {
        self.order
            .iter()
            .filter_map(|id| self.patterns.get(id))
            .collect()
    }

    /// Descriptors whose category equals `category`.
    pub fn get_by_category(&self, category: PatternCategory) -> Vec<&PatternDescriptor> {
        self.filter(|p| p.category == category)
    }

    /// Descriptors with a domain tag that contains, or is contained in, `term`.
    ///
    /// Case-insensitive, so both `"trav"` and `"travel booking"` match a
    /// `"travel"` tag.
    pub fn search_by_domain(&self, term: &str) -> Vec<&PatternDescriptor> {
        let term = term.to_lowercase();
        self.filter(|p| p.matches_domain(&term))
    }

    /// Descriptors whose name, description, domain tags, or category contain `term`.
    pub fn search(&self, term: &str) -> Vec<&PatternDescriptor> {
        let needle = term.to_lowercase();
        self.filter(|p| p.matches_text(&needle))
    }

    /// Registered ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn filter<F>(&self, predicate: F) -> Vec<&PatternDescriptor>
    where
        F: Fn(&PatternDescriptor) -> bool,
    {
        self.get_all().into_iter().filter(|p| predicate(p)).collect()
    }
}
