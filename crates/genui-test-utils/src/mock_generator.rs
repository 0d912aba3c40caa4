// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock image generator for deterministic testing.
//!
//! `MockImageGenerator` implements `ImageGenerator` with pre-configured
//! results, so gateway tests never call the real API.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use genui_core::{GeneratedImage, GenuiError, ImageGenerator};

/// Bytes returned when the queue is empty.
pub const DEFAULT_IMAGE: &[u8] = b"\x89PNG\r\n\x1a\nmock";

/// One scripted generator result.
#[derive(Debug, Clone)]
pub enum MockResult {
    Image { data: Vec<u8>, mime_type: String },
    TextOnly(Option<String>),
    Upstream { status: u16, body: String },
    Failure(String),
}

impl MockResult {
    fn into_result(self) -> Result<GeneratedImage, GenuiError> {
        match self {
            Self::Image { data, mime_type } => Ok(GeneratedImage::Image { data, mime_type }),
            Self::TextOnly(text) => Ok(GeneratedImage::TextOnly { text }),
            Self::Upstream { status, body } => Err(GenuiError::Upstream { status, body }),
            Self::Failure(message) => Err(GenuiError::provider(message)),
        }
    }
}

/// A mock generator that replays queued results.
///
/// Results are popped from a FIFO queue. When the queue is empty, a small
/// PNG-looking payload is returned. Every prompt is recorded.
pub struct MockImageGenerator {
    results: Mutex<VecDeque<MockResult>>,
    prompts: Mutex<Vec<String>>,
}

impl MockImageGenerator {
    pub fn new() -> Self {
        Self::with_results(Vec::new())
    }

    pub fn with_results(results: Vec<MockResult>) -> Self {
        Self {
            results: Mutex::new(VecDeque::from(results)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, result: MockResult) {
        self.results.lock().unwrap().push_back(result);
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockImageGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    fn model(&self) -> &str {
        "mock-image-model"
    }

    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenuiError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let next = self.results.lock().unwrap().pop_front();
        match next {
            Some(result) => result.into_result(),
            None => Ok(GeneratedImage::Image {
                data: DEFAULT_IMAGE.to_vec(),
                mime_type: "image/png".to_string(),
            }),
        }
    }
}
