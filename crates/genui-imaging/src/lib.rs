// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image generation and caching for the GenUI Playground.
//!
//! [`GeminiClient`] turns prompts into image bytes. An [`ImageStore`] backend
//! keeps them addressable by a short id so that only a URL, never the
//! base64 payload, travels back through the chat context:
//! - [`MemoryImageStore`] -- process-local, swept on a retention window
//! - [`GcsImageStore`] -- objects in a Google Cloud Storage bucket

pub mod gcs;
pub mod gemini;
pub mod id;
pub mod memory;
pub mod pipeline;
pub mod tool;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use genui_config::model::{ImageBackend, ImagesConfig};
use genui_core::{Clock, GenuiError, ImageStore};

pub use gcs::GcsImageStore;
pub use gemini::GeminiClient;
pub use memory::MemoryImageStore;
pub use pipeline::{generate_and_store, GenerationOutcome};
pub use tool::GenerateImageTool;

/// Builds the image store selected by `[images] backend`.
pub fn build_image_store(
    config: &ImagesConfig,
    clock: Arc<dyn Clock>,
) -> Result<Arc<dyn ImageStore>, GenuiError> {
    let store: Arc<dyn ImageStore> = match config.backend {
        ImageBackend::Memory => Arc::new(MemoryImageStore::new(
            clock,
            Duration::from_secs(config.retention_secs),
        )),
        ImageBackend::Gcs => Arc::new(GcsImageStore::from_config(&config.gcs, clock)?),
    };
    tracing::info!(backend = store.name(), "image store ready");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use genui_config::model::GcsConfig;
    use genui_core::SystemClock;

    use super::*;

    #[test]
    fn memory_backend_by_default() {
        let store = build_image_store(&ImagesConfig::default(), Arc::new(SystemClock)).unwrap();
        assert_eq!(store.name(), "memory");
    }

    #[test]
    fn gcs_backend_from_config() {
        let config = ImagesConfig {
            backend: ImageBackend::Gcs,
            gcs: GcsConfig {
                bucket: Some("b".into()),
                access_token: Some("t".into()),
                ..GcsConfig::default()
            },
            ..ImagesConfig::default()
        };
        let store = build_image_store(&config, Arc::new(SystemClock)).unwrap();
        assert_eq!(store.name(), "gcs");
    }

    #[test]
    fn gcs_backend_without_bucket_fails() {
        let config = ImagesConfig {
            backend: ImageBackend::Gcs,
            ..ImagesConfig::default()
        };
        assert!(build_image_store(&config, Arc::new(SystemClock)).is_err());
    }
}
