// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{get, post},
    Router,
};
use genui_core::{GenuiError, ImageGenerator, ImageStore, ToolRegistry};
use genui_imaging::GenerateImageTool;
use genui_patterns::{register_discovery_tools, PatternRegistry};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{handlers, patterns, tools};

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Pattern registry, built before the server starts.
    pub registry: Arc<PatternRegistry>,
    /// Where generated images are cached.
    pub images: Arc<dyn ImageStore>,
    /// Image generator; `None` when no API key is configured.
    pub generator: Option<Arc<dyn ImageGenerator>>,
    /// Agent tools exposed under `/tools`.
    pub tools: Arc<ToolRegistry>,
    /// `max-age` sent with cached image bytes.
    pub cache_max_age_secs: u64,
    /// Process start time for uptime calculation.
    pub start_time: Instant,
}

impl GatewayState {
    /// Assembles the state and registers the agent tools.
    ///
    /// The discovery tools are always available; `generate_image` only when a
    /// generator is configured.
    pub fn new(
        registry: Arc<PatternRegistry>,
        images: Arc<dyn ImageStore>,
        generator: Option<Arc<dyn ImageGenerator>>,
        cache_max_age_secs: u64,
    ) -> Self {
        let mut tools = ToolRegistry::new();
        register_discovery_tools(&mut tools, &registry);
        if let Some(generator) = &generator {
            tools.register(Arc::new(GenerateImageTool::new(
                Arc::clone(generator),
                Arc::clone(&images),
            )));
        }

        Self {
            registry,
            images,
            generator,
            tools: Arc::new(tools),
            cache_max_age_secs,
            start_time: Instant::now(),
        }
    }
}

/// Gateway server configuration (mirrors `[server]` from genui-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Builds the application router.
///
/// Routes:
/// - POST/GET /generate-image
/// - GET /patterns, /patterns/search, /patterns/domain/{term},
///   /patterns/category/{category}, /patterns/{id}; POST /patterns/gallery
/// - GET /tools, POST /tools/{name}
/// - GET /health
pub fn build_router(state: GatewayState) -> Router {
    let image_routes = Router::new().route(
        "/generate-image",
        post(handlers::post_generate_image).get(handlers::get_image),
    );

    let pattern_routes = Router::new()
        .route("/patterns", get(patterns::list_patterns))
        .route("/patterns/search", get(patterns::search_patterns))
        .route("/patterns/domain/{term}", get(patterns::patterns_by_domain))
        .route("/patterns/category/{category}", get(patterns::patterns_by_category))
        .route("/patterns/gallery", post(patterns::post_gallery))
        .route("/patterns/{id}", get(patterns::get_pattern));

    let tool_routes = Router::new()
        .route("/tools", get(tools::list_tools))
        .route("/tools/{name}", post(tools::invoke_tool));

    Router::new()
        .route("/health", get(handlers::get_health))
        .merge(image_routes)
        .merge(pattern_routes)
        .merge(tool_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Binds `host:port` and serves until `shutdown` resolves.
pub async fn start_server<F>(
    config: &ServerConfig,
    state: GatewayState,
    shutdown: F,
) -> Result<(), GenuiError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| GenuiError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    let local = listener
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| addr.clone());
    tracing::info!("Gateway server listening on {local}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| GenuiError::Internal(format!("gateway server error: {e}")))?;

    tracing::info!("Gateway server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use genui_core::SystemClock;
    use genui_imaging::memory::{MemoryImageStore, DEFAULT_RETENTION};

    use super::*;

    fn state(generator: Option<Arc<dyn ImageGenerator>>) -> GatewayState {
        GatewayState::new(
            Arc::new(PatternRegistry::with_builtin_patterns()),
            Arc::new(MemoryImageStore::new(Arc::new(SystemClock), DEFAULT_RETENTION)),
            generator,
            600,
        )
    }

    #[test]
    fn gateway_state_is_clone() {
        let state = state(None);
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.registry, &cloned.registry));
    }

    #[test]
    fn discovery_tools_always_registered() {
        let state = state(None);
        assert_eq!(state.tools.len(), 3);
        assert!(state.tools.get("generate_image").is_none());
    }

    #[test]
    fn server_config_debug() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("127.0.0.1"));
    }
}
