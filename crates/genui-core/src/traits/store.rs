// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image store trait for generated image payloads.

use async_trait::async_trait;

use crate::error::GenuiError;
use crate::types::{HealthStatus, ImageEntry, StoredImage};

/// Backend that keeps generated images behind short identifiers.
///
/// Implementations trade large base64 payloads for a small id and URL that
/// downstream consumers can dereference later.
#[async_trait]
pub trait ImageStore: Send + Sync + 'static {
    /// Human-readable backend name (`memory`, `gcs`).
    fn name(&self) -> &str;

    /// Stores `payload` and returns its identifier and public URL.
    async fn put(&self, payload: Vec<u8>, mime_type: &str) -> Result<StoredImage, GenuiError>;

    /// Returns the entry for `id`, or `None` when it is unknown or expired.
    async fn get(&self, id: &str) -> Result<Option<ImageEntry>, GenuiError>;

    /// Reports whether the backend is usable.
    async fn health_check(&self) -> Result<HealthStatus, GenuiError> {
        Ok(HealthStatus::Healthy)
    }
}
