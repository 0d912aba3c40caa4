// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pattern registry endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use genui_core::PatternCategory;
use genui_patterns::{render_card, render_gallery, GalleryRequest, PatternCardView, PatternDescriptor};
use serde::{Deserialize, Serialize};

use crate::handlers::error_response;
use crate::server::GatewayState;

/// Pattern metadata without source code or props.
#[derive(Debug, Serialize)]
pub struct PatternSummary {
    pub id: String,
    pub name: String,
    pub category: PatternCategory,
    pub domains: Vec<String>,
    pub description: String,
}

impl From<&PatternDescriptor> for PatternSummary {
    fn from(p: &PatternDescriptor) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            category: p.category,
            domains: p.domains.clone(),
            description: p.description.clone(),
        }
    }
}

fn summaries(patterns: Vec<&PatternDescriptor>) -> Json<Vec<PatternSummary>> {
    Json(patterns.into_iter().map(PatternSummary::from).collect())
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CardQuery {
    /// JSON object overriding the default props.
    #[serde(default)]
    pub mock_data: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// GET /patterns
pub async fn list_patterns(State(state): State<GatewayState>) -> Json<Vec<PatternSummary>> {
    summaries(state.registry.get_all())
}

/// GET /patterns/search?q=<term>
pub async fn search_patterns(
    State(state): State<GatewayState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    match query.q {
        Some(q) => summaries(state.registry.search(&q)).into_response(),
        None => error_response(StatusCode::BAD_REQUEST, "Query parameter 'q' is required"),
    }
}

/// GET /patterns/domain/{term}
pub async fn patterns_by_domain(
    State(state): State<GatewayState>,
    Path(term): Path<String>,
) -> Json<Vec<PatternSummary>> {
    summaries(state.registry.search_by_domain(&term))
}

/// GET /patterns/category/{category}
pub async fn patterns_by_category(
    State(state): State<GatewayState>,
    Path(category): Path<String>,
) -> Response {
    match category.parse::<PatternCategory>() {
        Ok(category) => summaries(state.registry.get_by_category(category)).into_response(),
        Err(_) => error_response(
            StatusCode::BAD_REQUEST,
            format!(
                "Unknown category '{category}'. Valid categories: {}",
                PatternCategory::valid_names()
            ),
        ),
    }
}

/// GET /patterns/{id}?mock_data=<json>&explanation=<text>
pub async fn get_pattern(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
    Query(query): Query<CardQuery>,
) -> Response {
    let view = render_card(
        &state.registry,
        &id,
        query.mock_data.as_deref(),
        query.explanation.as_deref(),
    );
    let status = match view {
        PatternCardView::Found(_) => StatusCode::OK,
        PatternCardView::Missing { .. } => StatusCode::NOT_FOUND,
    };
    (status, Json(view)).into_response()
}

/// POST /patterns/gallery
pub async fn post_gallery(
    State(state): State<GatewayState>,
    Json(request): Json<GalleryRequest>,
) -> Response {
    Json(render_gallery(&state.registry, &request)).into_response()
}
