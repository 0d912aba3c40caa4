// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt in, cached image reference out.

use genui_core::{GeneratedImage, GenuiError, ImageGenerator, ImageStore, StoredImage};
use tracing::info;

/// Result of a generation request that reached the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// An image was produced and stored.
    Stored(StoredImage),
    /// The model replied without an image; carries its text, if any.
    NoImage { message: Option<String> },
}

/// Generates an image for `prompt` and stores it.
///
/// Blank prompts are rejected before any upstream call.
pub async fn generate_and_store(
    generator: &dyn ImageGenerator,
    store: &dyn ImageStore,
    prompt: &str,
) -> Result<GenerationOutcome, GenuiError> {
    if prompt.trim().is_empty() {
        return Err(GenuiError::InvalidInput("prompt is required".into()));
    }

    match generator.generate(prompt).await? {
        GeneratedImage::Image { data, mime_type } => {
            let bytes = data.len();
            let stored = store.put(data, &mime_type).await?;
            info!(
                image_id = %stored.id,
                model = generator.model(),
                store = store.name(),
                bytes,
                "image generated"
            );
            Ok(GenerationOutcome::Stored(stored))
        }
        GeneratedImage::TextOnly { text } => {
            info!(model = generator.model(), "model returned no image");
            Ok(GenerationOutcome::NoImage { message: text })
        }
    }
}
