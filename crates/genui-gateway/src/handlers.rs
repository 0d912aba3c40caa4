// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image endpoint and health handlers.
//!
//! `POST /generate-image` proxies a prompt to the image generator and caches
//! the result; `GET /generate-image?id=` serves the cached bytes. Only the
//! short id and URL go back to the caller, never the image itself.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use genui_core::{GenuiError, HealthStatus};
use genui_imaging::{generate_and_store, GenerationOutcome};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::server::GatewayState;

/// Success body for POST /generate-image.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    pub success: bool,
    pub image_id: String,
    pub image_url: String,
}

/// Body for a generation that reached the model but produced no image.
#[derive(Debug, Serialize)]
pub struct NoImageResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
}

/// Query for GET /generate-image.
#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    #[serde(default)]
    pub id: Option<String>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, `degraded` or `unhealthy`.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the gateway state was created.
    pub uptime_secs: u64,
    /// Number of registered patterns.
    pub patterns: usize,
    /// Active image store backend.
    pub image_store: String,
    /// Whether an image generator is configured.
    pub image_generation: bool,
    /// Reason for a non-ok status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
    /// Extra context, e.g. the upstream response body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Builds a JSON error response.
pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            details: None,
        }),
    )
        .into_response()
}

fn error_with_details(status: StatusCode, error: &str, details: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            details: Some(details.into()),
        }),
    )
        .into_response()
}

/// The `prompt` string of a request body, if present and not blank.
fn prompt_field(request: &Value) -> Option<&str> {
    request
        .get("prompt")
        .and_then(Value::as_str)
        .filter(|p| !p.trim().is_empty())
}

fn prompt_required() -> Response {
    error_response(StatusCode::BAD_REQUEST, "Prompt is required")
}

/// POST /generate-image
///
/// The body is parsed by hand: bytes that are not JSON at all are reported
/// as an internal failure, while any JSON without a non-blank string
/// `prompt` is a 400.
pub async fn post_generate_image(State(state): State<GatewayState>, body: Bytes) -> Response {
    let request: Value = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "unreadable generate-image body");
            return error_with_details(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                e.to_string(),
            );
        }
    };

    let Some(prompt) = prompt_field(&request) else {
        return prompt_required();
    };

    let Some(generator) = state.generator.as_ref() else {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "GEMINI_API_KEY not configured",
        );
    };

    match generate_and_store(generator.as_ref(), state.images.as_ref(), prompt).await {
        Ok(GenerationOutcome::Stored(stored)) => (
            StatusCode::OK,
            Json(GenerateImageResponse {
                success: true,
                image_id: stored.id,
                image_url: stored.url,
            }),
        )
            .into_response(),
        Ok(GenerationOutcome::NoImage { message }) => (
            StatusCode::OK,
            Json(NoImageResponse {
                success: false,
                error: "No image generated".to_string(),
                message: message.unwrap_or_else(|| "Unknown error".to_string()),
            }),
        )
            .into_response(),
        Err(GenuiError::InvalidInput(_)) => prompt_required(),
        Err(GenuiError::Upstream { status, body }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            error_with_details(status, "Image generation failed", body)
        }
        Err(e) => {
            tracing::error!(error = %e, "image generation error");
            error_with_details(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                e.to_string(),
            )
        }
    }
}

/// GET /generate-image?id=<id>
pub async fn get_image(
    State(state): State<GatewayState>,
    Query(query): Query<ImageQuery>,
) -> Response {
    let Some(id) = query.id.filter(|id| !id.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Image ID required");
    };

    match state.images.get(&id).await {
        Ok(Some(entry)) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, entry.mime_type),
                (
                    header::CACHE_CONTROL,
                    format!("public, max-age={}", state.cache_max_age_secs),
                ),
            ],
            entry.payload,
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Image not found or expired"),
        Err(e) => {
            tracing::error!(image_id = %id, error = %e, "image lookup failed");
            error_with_details(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error",
                e.to_string(),
            )
        }
    }
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    let (status, detail) = match state.images.health_check().await {
        Ok(HealthStatus::Healthy) => ("ok", None),
        Ok(HealthStatus::Degraded(reason)) => ("degraded", Some(reason)),
        Ok(HealthStatus::Unhealthy(reason)) => ("unhealthy", Some(reason)),
        Err(e) => ("unhealthy", Some(e.to_string())),
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        patterns: state.registry.len(),
        image_store: state.images.name().to_string(),
        image_generation: state.generator.is_some(),
        detail,
    })
}
