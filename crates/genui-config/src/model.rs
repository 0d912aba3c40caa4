// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the GenUI Playground service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level service configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GenuiConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Gemini image generation settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Generated image storage settings.
    #[serde(default)]
    pub images: ImagesConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind. `0` picks an ephemeral port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. `None` disables image generation.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Image-capable model identifier.
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// API base URL, without the `/models/...` suffix.
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_gemini_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            timeout_secs: default_gemini_timeout_secs(),
        }
    }
}

fn default_gemini_model() -> String {
    "gemini-3-pro-image-preview".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_timeout_secs() -> u64 {
    120
}

/// Which image store backs `/generate-image`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageBackend {
    /// Process-local map with time-based sweep.
    #[default]
    Memory,
    /// Google Cloud Storage bucket with public object URLs.
    Gcs,
}

/// Image storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ImagesConfig {
    /// Storage backend.
    #[serde(default)]
    pub backend: ImageBackend,

    /// How long in-memory images are kept before the next write sweeps them.
    #[serde(default = "default_retention_secs")]
    pub retention_secs: u64,

    /// `max-age` sent with served image bytes.
    #[serde(default = "default_cache_max_age_secs")]
    pub cache_max_age_secs: u64,

    /// GCS settings, required when `backend = "gcs"`.
    #[serde(default)]
    pub gcs: GcsConfig,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            backend: ImageBackend::default(),
            retention_secs: default_retention_secs(),
            cache_max_age_secs: default_cache_max_age_secs(),
            gcs: GcsConfig::default(),
        }
    }
}

fn default_retention_secs() -> u64 {
    600
}

fn default_cache_max_age_secs() -> u64 {
    600
}

/// Google Cloud Storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GcsConfig {
    /// Bucket name.
    #[serde(default)]
    pub bucket: Option<String>,

    /// OAuth2 bearer token with object write access.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Prefix prepended to every object name.
    #[serde(default = "default_object_prefix")]
    pub object_prefix: String,

    /// Storage API host (overridable for tests).
    #[serde(default = "default_gcs_api_base_url")]
    pub api_base_url: String,
}

impl Default for GcsConfig {
    fn default() -> Self {
        Self {
            bucket: None,
            access_token: None,
            object_prefix: default_object_prefix(),
            api_base_url: default_gcs_api_base_url(),
        }
    }
}

fn default_object_prefix() -> String {
    "genui/".to_string()
}

fn default_gcs_api_base_url() -> String {
    "https://storage.googleapis.com".to_string()
}

impl GenuiConfig {
    /// Returns a copy with secrets replaced by `[redacted]`, for display.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.gemini.api_key.is_some() {
            copy.gemini.api_key = Some("[redacted]".to_string());
        }
        if copy.images.gcs.access_token.is_some() {
            copy.images.gcs.access_token = Some("[redacted]".to_string());
        }
        copy
    }
}
