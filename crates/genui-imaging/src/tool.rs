// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `generate_image` agent tool.

use std::sync::Arc;

use async_trait::async_trait;
use genui_core::{GenuiError, ImageGenerator, ImageStore, Tool, ToolOutput};
use serde_json::{json, Value};

use crate::pipeline::{generate_and_store, GenerationOutcome};

/// Lets the agent illustrate a generated component.
///
/// Always answers with `{success, imageUrl, error?}`; failures are reported
/// in the payload rather than as tool errors so the agent can fall back to a
/// placeholder.
pub struct GenerateImageTool {
    generator: Arc<dyn ImageGenerator>,
    store: Arc<dyn ImageStore>,
}

impl GenerateImageTool {
    pub fn new(generator: Arc<dyn ImageGenerator>, store: Arc<dyn ImageStore>) -> Self {
        Self { generator, store }
    }
}

fn failure(error: impl Into<String>) -> ToolOutput {
    ToolOutput::ok(json!({
        "success": false,
        "imageUrl": "",
        "error": error.into(),
    }))
}

#[async_trait]
impl Tool for GenerateImageTool {
    fn name(&self) -> &str {
        "generate_image"
    }

    fn description(&self) -> &str {
        "Generate an image from a text description, for product photos, destinations, \
         avatars, icons or backgrounds. Returns a short URL to the image."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "A detailed description of the image. Be specific about style, colors, and subject matter."
                }
            },
            "required": ["prompt"]
        })
    }

    async fn invoke(&self, input: Value) -> Result<ToolOutput, GenuiError> {
        let prompt = input["prompt"].as_str().unwrap_or_default();

        match generate_and_store(self.generator.as_ref(), self.store.as_ref(), prompt).await {
            Ok(GenerationOutcome::Stored(stored)) => Ok(ToolOutput::ok(json!({
                "success": true,
                "imageUrl": stored.url,
            }))),
            Ok(GenerationOutcome::NoImage { message }) => {
                Ok(failure(message.unwrap_or_else(|| "No image generated".into())))
            }
            Err(e) => {
                tracing::warn!(error = %e, "generate_image tool failed");
                Ok(failure(e.to_string()))
            }
        }
    }
}
