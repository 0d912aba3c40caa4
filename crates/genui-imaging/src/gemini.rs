// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini image generation API.
//!
//! [`GeminiClient`] sends one `generateContent` request per prompt and turns
//! the first inline image part into raw bytes. Failures are not retried; an
//! upstream error status is surfaced as [`GenuiError::Upstream`] so callers can
//! relay it.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use genui_config::model::GeminiConfig;
use genui_core::{GeneratedImage, GenuiError, ImageGenerator};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, warn};

use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// MIME type assumed when the API omits one.
pub const DEFAULT_MIME_TYPE: &str = "image/png";

/// Gemini API client bound to one model.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a client authenticating with `api_key`.
    pub fn new(
        api_key: &str,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenuiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| GenuiError::Config(format!("invalid API key header value: {e}")))?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| GenuiError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Builds a client from `[gemini]` settings. `None` when no API key is set.
    pub fn from_config(config: &GeminiConfig) -> Result<Option<Self>, GenuiError> {
        match config.api_key.as_deref().filter(|k| !k.is_empty()) {
            Some(key) => Self::new(
                key,
                config.model.clone(),
                config.base_url.clone(),
                Duration::from_secs(config.timeout_secs),
            )
            .map(Some),
            None => Ok(None),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, GenuiError> {
        let request = GenerateContentRequest::image_prompt(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| GenuiError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, model = %self.model, "generateContent response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Gemini API error");
            return Err(GenuiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|e| GenuiError::Provider {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| GenuiError::Provider {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        extract_image(&parsed)
    }
}

/// Picks the first inline image of the first candidate, else its first text.
pub fn extract_image(response: &GenerateContentResponse) -> Result<GeneratedImage, GenuiError> {
    let parts = response.first_candidate_parts();

    if let Some(inline) = parts.iter().find_map(|p| p.inline_data.as_ref()) {
        let data = STANDARD
            .decode(inline.data.as_bytes())
            .map_err(|e| GenuiError::Provider {
                message: format!("invalid base64 image data: {e}"),
                source: Some(Box::new(e)),
            })?;
        let mime_type = inline
            .mime_type
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());
        return Ok(GeneratedImage::Image { data, mime_type });
    }

    let text = parts.iter().find_map(|p| p.text.clone());
    Ok(GeneratedImage::TextOnly { text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL: &str = "gemini-3-pro-image-preview";

    fn test_client(base_url: &str) -> GeminiClient {
        GeminiClient::new("test-api-key", MODEL, base_url, Duration::from_secs(5)).unwrap()
    }

    fn image_response(mime: Option<&str>, data: &str) -> serde_json::Value {
        let mut inline = json!({ "data": data });
        if let Some(mime) = mime {
            inline["mimeType"] = json!(mime);
        }
        json!({
            "candidates": [{
                "content": { "parts": [ { "text": "Sure" }, { "inlineData": inline } ] }
            }]
        })
    }

    #[tokio::test]
    async fn generate_decodes_inline_image() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/models/{MODEL}:generateContent")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(image_response(Some("image/jpeg"), "AAECAw==")),
            )
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).generate("a cat").await.unwrap();
        assert_eq!(
            result,
            GeneratedImage::Image {
                data: vec![0, 1, 2, 3],
                mime_type: "image/jpeg".into(),
            }
        );
    }

    #[tokio::test]
    async fn missing_mime_type_defaults_to_png() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(image_response(None, "AAEC")))
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).generate("a cat").await.unwrap();
        assert!(matches!(result, GeneratedImage::Image { mime_type, .. } if mime_type == "image/png"));
    }

    #[tokio::test]
    async fn text_only_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "I cannot draw that" }] } }]
            })))
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).generate("x").await.unwrap();
        assert_eq!(
            result,
            GeneratedImage::TextOnly {
                text: Some("I cannot draw that".into())
            }
        );
    }

    #[tokio::test]
    async fn upstream_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server.uri()).generate("x").await.unwrap_err();
        match err {
            GenuiError::Upstream { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn sends_key_header_and_request_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("x-goog-api-key", "test-api-key"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "contents": [{ "parts": [{ "text": "a lighthouse" }] }],
                "generationConfig": { "responseModalities": ["IMAGE", "TEXT"] }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(image_response(None, "AA==")))
            .expect(1)
            .mount(&server)
            .await;

        let result = test_client(&server.uri()).generate("a lighthouse").await;
        assert!(result.is_ok(), "request should match: {result:?}");
    }

    #[tokio::test]
    async fn malformed_body_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = test_client(&server.uri()).generate("x").await.unwrap_err();
        assert!(matches!(err, GenuiError::Provider { .. }));
    }

    #[test]
    fn invalid_base64_is_provider_error() {
        let response: GenerateContentResponse =
            serde_json::from_value(image_response(None, "not base64!")).unwrap();
        assert!(matches!(extract_image(&response), Err(GenuiError::Provider { .. })));
    }

    #[test]
    fn from_config_without_key_is_none() {
        let config = GeminiConfig::default();
        assert!(GeminiClient::from_config(&config).unwrap().is_none());

        let config = GeminiConfig {
            api_key: Some("k".into()),
            ..GeminiConfig::default()
        };
        let client = GeminiClient::from_config(&config).unwrap().unwrap();
        assert_eq!(client.model(), "gemini-3-pro-image-preview");
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client = GeminiClient::new("k", "m", "http://h/v1beta/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint(), "http://h/v1beta/models/m:generateContent");
    }
}
