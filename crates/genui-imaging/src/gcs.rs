// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Cloud Storage image backend.
//!
//! Images are uploaded through the JSON API's media upload endpoint and
//! served from the bucket's public URL, so clients fetch them without going
//! through this service. Expiry is left to the bucket's lifecycle rules.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use genui_config::model::GcsConfig;
use genui_core::{Clock, GenuiError, HealthStatus, ImageEntry, ImageStore, StoredImage};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use tracing::{debug, warn};

use crate::id::generate_image_id;

const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Image store that writes objects into a GCS bucket.
pub struct GcsImageStore {
    client: reqwest::Client,
    bucket: String,
    object_prefix: String,
    api_base_url: String,
    access_token: String,
    clock: Arc<dyn Clock>,
}

impl GcsImageStore {
    pub fn new(
        bucket: impl Into<String>,
        access_token: impl Into<String>,
        object_prefix: impl Into<String>,
        api_base_url: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, GenuiError> {
        let client = reqwest::Client::builder()
            .timeout(UPLOAD_TIMEOUT)
            .build()
            .map_err(|e| GenuiError::Storage {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            bucket: bucket.into(),
            object_prefix: object_prefix.into(),
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            clock,
        })
    }

    /// Builds the store from `[images.gcs]`. Bucket and token must be set.
    pub fn from_config(config: &GcsConfig, clock: Arc<dyn Clock>) -> Result<Self, GenuiError> {
        let bucket = config
            .bucket
            .clone()
            .ok_or_else(|| GenuiError::Config("images.gcs.bucket is required".into()))?;
        let token = config
            .access_token
            .clone()
            .ok_or_else(|| GenuiError::Config("images.gcs.access_token is required".into()))?;
        Self::new(
            bucket,
            token,
            config.object_prefix.clone(),
            config.api_base_url.clone(),
            clock,
        )
    }

    fn object_name(&self, id: &str) -> String {
        format!("{}{id}", self.object_prefix)
    }

    /// Public URL of an object.
    pub fn public_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.api_base_url, self.bucket, self.object_name(id))
    }

    /// Builds `<api_base_url>/<segments...>`, percent-encoding each segment.
    fn api_url(&self, segments: &[&str]) -> Result<Url, GenuiError> {
        let mut url = Url::parse(&self.api_base_url).map_err(|e| GenuiError::Storage {
            message: format!("invalid GCS API base URL: {e}"),
            source: Some(Box::new(e)),
        })?;
        url.path_segments_mut()
            .map_err(|()| GenuiError::storage("GCS API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

fn request_error(e: reqwest::Error) -> GenuiError {
    GenuiError::Storage {
        message: format!("GCS request failed: {e}"),
        source: Some(Box::new(e)),
    }
}

#[async_trait]
impl ImageStore for GcsImageStore {
    fn name(&self) -> &str {
        "gcs"
    }

    async fn put(&self, payload: Vec<u8>, mime_type: &str) -> Result<StoredImage, GenuiError> {
        let id = generate_image_id(self.clock.now());
        let object = self.object_name(&id);

        let mut url = self.api_url(&["upload", "storage", "v1", "b", &self.bucket, "o"])?;
        url.query_pairs_mut()
            .append_pair("uploadType", "media")
            .append_pair("name", &object);

        let bytes = payload.len();
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, self.bearer())
            .header(CONTENT_TYPE, mime_type)
            .body(payload)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, bucket = %self.bucket, object = %object, "GCS upload failed");
            return Err(GenuiError::storage(format!(
                "GCS upload returned {status}: {body}"
            )));
        }

        debug!(image_id = %id, bucket = %self.bucket, bytes, "uploaded image to GCS");
        Ok(StoredImage {
            url: self.public_url(&id),
            id,
        })
    }

    async fn get(&self, id: &str) -> Result<Option<ImageEntry>, GenuiError> {
        let object = self.object_name(id);
        let mut url = self.api_url(&["storage", "v1", "b", &self.bucket, "o", &object])?;
        url.query_pairs_mut().append_pair("alt", "media");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenuiError::storage(format!(
                "GCS download returned {status}: {body}"
            )));
        }

        let mime_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(crate::gemini::DEFAULT_MIME_TYPE)
            .to_string();
        let payload = response.bytes().await.map_err(request_error)?.to_vec();

        Ok(Some(ImageEntry {
            id: id.to_string(),
            payload,
            mime_type,
            // Object metadata is not fetched; the read time stands in.
            created_at: self.clock.now(),
        }))
    }

    async fn health_check(&self) -> Result<HealthStatus, GenuiError> {
        let url = self.api_url(&["storage", "v1", "b", &self.bucket])?;
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await;

        Ok(match response {
            Ok(r) if r.status().is_success() => HealthStatus::Healthy,
            Ok(r) => HealthStatus::Degraded(format!("bucket lookup returned {}", r.status())),
            Err(e) => HealthStatus::Unhealthy(format!("GCS unreachable: {e}")),
        })
    }
}

#[cfg(test)]
mod tests {
    use genui_core::SystemClock;
    use wiremock::matchers::{header, method, path, path_regex, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn store(base: &str) -> GcsImageStore {
        GcsImageStore::new("test-bucket", "tok", "genui/", base, Arc::new(SystemClock)).unwrap()
    }

    #[tokio::test]
    async fn put_uploads_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload/storage/v1/b/test-bucket/o"))
            .and(query_param("uploadType", "media"))
            .and(header("authorization", "Bearer tok"))
            .and(header("content-type", "image/png"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": "x" })))
            .expect(1)
            .mount(&server)
            .await;

        let store = store(&server.uri());
        let stored = store.put(vec![1, 2, 3], "image/png").await.unwrap();

        assert!(stored.id.starts_with("img_"));
        assert_eq!(
            stored.url,
            format!("{}/test-bucket/genui/{}", server.uri(), stored.id)
        );
    }

    #[tokio::test]
    async fn put_upload_failure_is_storage_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&server)
            .await;

        let err = store(&server.uri()).put(vec![1], "image/png").await.unwrap_err();
        assert!(matches!(err, GenuiError::Storage { ref message, .. } if message.contains("403")));
    }

    #[tokio::test]
    async fn get_downloads_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/storage/v1/b/test-bucket/o/.+"))
            .and(query_param("alt", "media"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "image/jpeg")
                    .set_body_bytes(vec![7u8, 8, 9]),
            )
            .mount(&server)
            .await;

        let entry = store(&server.uri()).get("img_abc").await.unwrap().unwrap();
        assert_eq!(entry.id, "img_abc");
        assert_eq!(entry.payload, vec![7, 8, 9]);
        assert_eq!(entry.mime_type, "image/jpeg");
    }

    #[tokio::test]
    async fn get_missing_object_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        assert!(store(&server.uri()).get("img_gone").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn health_check_reports_bucket_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/storage/v1/b/test-bucket"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let status = store(&server.uri()).health_check().await.unwrap();
        assert_eq!(status, HealthStatus::Healthy);
    }

    #[test]
    fn from_config_requires_bucket() {
        let config = GcsConfig::default();
        let result = GcsImageStore::from_config(&config, Arc::new(SystemClock));
        assert!(matches!(result, Err(GenuiError::Config(_))));
    }

    #[test]
    fn object_names_are_percent_encoded_in_api_paths() {
        let store = store("http://localhost:4443");
        let url = store
            .api_url(&["storage", "v1", "b", "test-bucket", "o", "genui/img_1"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:4443/storage/v1/b/test-bucket/o/genui%2Fimg_1"
        );
    }
}
