// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Galleries: several pattern cards shown together, each with a reason.

use serde::{Deserialize, Serialize};

use crate::card::{render_card, PatternCardView};
use crate::registry::PatternRegistry;

/// Shown instead of cards when a gallery request names no patterns.
pub const EMPTY_GALLERY_MESSAGE: &str = "No patterns to display";

/// One requested card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryEntry {
    pub pattern_id: String,
    #[serde(default)]
    pub mock_data_json: Option<String>,
    /// Why the pattern suits the user; rendered as the card's explanation.
    #[serde(default)]
    pub relevance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryRequest {
    #[serde(default)]
    pub patterns: Vec<GalleryEntry>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cards: Vec<PatternCardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Resolves every entry of `request` to a card view, keeping request order.
///
/// Unknown ids produce `Missing` cards rather than failing the gallery.
pub fn render_gallery(registry: &PatternRegistry, request: &GalleryRequest) -> GalleryView {
    if request.patterns.is_empty() {
        return GalleryView {
            title: None,
            description: None,
            cards: Vec::new(),
            message: Some(EMPTY_GALLERY_MESSAGE.to_string()),
        };
    }

    let cards = request
        .patterns
        .iter()
        .map(|entry| {
            render_card(
                registry,
                &entry.pattern_id,
                entry.mock_data_json.as_deref(),
                entry.relevance.as_deref(),
            )
        })
        .collect();

    GalleryView {
        title: request.title.clone(),
        description: request.description.clone(),
        cards,
        message: None,
    }
}
