// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the registry, image pipeline and gateway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The fixed set of UI pattern categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PatternCategory {
    Visualization,
    Form,
    Card,
    Action,
    Status,
}

impl PatternCategory {
    /// Lowercase name, as used in queries and JSON.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Comma-separated list of every category name.
    pub fn valid_names() -> String {
        use strum::IntoEnumIterator;

        PatternCategory::iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Health status reported by the gateway and by store backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Fully operational.
    Healthy,
    /// Operational but missing an optional capability.
    Degraded(String),
    /// Not operational.
    Unhealthy(String),
}

/// A binary image held by an image store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Store-assigned identifier.
    pub id: String,
    /// Raw image bytes.
    pub payload: Vec<u8>,
    /// MIME type reported by the generator (e.g. `image/png`).
    pub mime_type: String,
    /// When the entry was stored.
    pub created_at: DateTime<Utc>,
}

/// Reference returned by an image store after a successful `put`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredImage {
    /// Short identifier, safe to pass through token-constrained consumers.
    pub id: String,
    /// URL a client can dereference to fetch the bytes.
    pub url: String,
}

/// Outcome of a single image generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedImage {
    /// The model returned inline image data.
    Image { data: Vec<u8>, mime_type: String },
    /// The model answered without an image part.
    TextOnly { text: Option<String> },
}
