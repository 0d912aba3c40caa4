// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the GenUI Playground service.

use thiserror::Error;

/// The primary error type shared by the registry, image pipeline and gateway.
#[derive(Debug, Error)]
pub enum GenuiError {
    /// Configuration errors (missing API key, invalid backend settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// Caller supplied input that cannot be processed (missing prompt, bad category).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A keyed lookup found nothing.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// An upstream HTTP service answered with a non-success status.
    ///
    /// The status and body are forwarded to the caller unchanged.
    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Image provider errors (transport failure, undecodable response).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image store errors (object store upload or download failure).
    #[error("storage error: {message}")]
    Storage {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GenuiError {
    /// Shorthand for a [`GenuiError::Provider`] without a source.
    pub fn provider(message: impl Into<String>) -> Self {
        GenuiError::Provider {
            message: message.into(),
            source: None,
        }
    }

    /// Shorthand for a [`GenuiError::Storage`] without a source.
    pub fn storage(message: impl Into<String>) -> Self {
        GenuiError::Storage {
            message: message.into(),
            source: None,
        }
    }
}
