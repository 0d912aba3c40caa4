// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent tool endpoints: list definitions and invoke by name.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use genui_core::GenuiError;

use crate::handlers::error_response;
use crate::server::GatewayState;

/// GET /tools
pub async fn list_tools(State(state): State<GatewayState>) -> Json<Vec<serde_json::Value>> {
    Json(state.tools.tool_definitions())
}

/// POST /tools/{name}
///
/// An empty body invokes the tool with `{}`.
pub async fn invoke_tool(
    State(state): State<GatewayState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Response {
    let input = if body.is_empty() {
        serde_json::json!({})
    } else {
        match serde_json::from_slice(&body) {
            Ok(input) => input,
            Err(e) => {
                return error_response(StatusCode::BAD_REQUEST, format!("Invalid JSON input: {e}"));
            }
        }
    };

    match state.tools.invoke(&name, input).await {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(GenuiError::NotFound { id, .. }) => {
            error_response(StatusCode::NOT_FOUND, format!("Unknown tool '{id}'"))
        }
        Err(GenuiError::InvalidInput(message)) => error_response(StatusCode::BAD_REQUEST, message),
        Err(e) => {
            tracing::error!(tool = %name, error = %e, "tool invocation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
