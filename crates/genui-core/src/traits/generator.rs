// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Image generator trait for text-to-image providers.

use async_trait::async_trait;

use crate::error::GenuiError;
use crate::types::GeneratedImage;

/// A text-to-image provider.
///
/// Each call is attempted exactly once. A non-success upstream status must be
/// reported as [`GenuiError::Upstream`] so the gateway can forward it.
#[async_trait]
pub trait ImageGenerator: Send + Sync + 'static {
    /// Model identifier used for generation.
    fn model(&self) -> &str;

    /// Generates an image for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenuiError>;
}
