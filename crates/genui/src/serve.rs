// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `genui serve` command implementation.
//!
//! Builds the pattern registry, the image store and (when an API key is
//! configured) the Gemini client, then serves the gateway until SIGINT or
//! SIGTERM.

use std::sync::Arc;

use genui_config::GenuiConfig;
use genui_core::{Clock, GenuiError, ImageGenerator, SystemClock};
use genui_gateway::{start_server, GatewayState, ServerConfig};
use genui_imaging::{build_image_store, GeminiClient};
use genui_patterns::PatternRegistry;
use tracing::{info, warn};

/// Runs the `genui serve` command.
pub async fn run_serve(config: GenuiConfig) -> Result<(), GenuiError> {
    init_tracing(&config.logging.level);

    info!("starting genui serve");

    let registry = Arc::new(PatternRegistry::with_builtin_patterns());
    info!(count = registry.len(), "pattern registry initialized");

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let images = build_image_store(&config.images, clock)?;

    let generator: Option<Arc<dyn ImageGenerator>> = match GeminiClient::from_config(&config.gemini)? {
        Some(client) => {
            info!(model = %config.gemini.model, "image generation enabled");
            Some(Arc::new(client) as Arc<dyn ImageGenerator>)
        }
        None => {
            warn!("GEMINI_API_KEY not set; image generation requests will fail");
            None
        }
    };

    let state = GatewayState::new(
        registry,
        images,
        generator,
        config.images.cache_max_age_secs,
    );

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    start_server(&server_config, state, shutdown_signal()).await
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT (Ctrl+C), initiating shutdown"),
        _ = terminate => info!("received SIGTERM, initiating shutdown"),
    }
}

/// Installs the fmt subscriber. `RUST_LOG` wins over `[logging] level`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("genui={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
