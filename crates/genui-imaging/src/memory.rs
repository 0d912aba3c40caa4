// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process image cache with a retention window.
//!
//! Entries older than the retention window are evicted lazily: every `put`
//! sweeps before inserting, and nothing else does. A `get` can therefore
//! still return an entry past its window if no `put` has happened since.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::TimeDelta;
use dashmap::DashMap;
use genui_core::{Clock, GenuiError, HealthStatus, ImageEntry, ImageStore, StoredImage};
use tracing::debug;

use crate::id::generate_image_id;

/// Default retention window (10 minutes).
pub const DEFAULT_RETENTION: Duration = Duration::from_secs(600);

/// Path clients use to fetch a cached image; the id is appended.
pub const IMAGE_URL_PREFIX: &str = "/generate-image?id=";

/// Image cache backed by a concurrent map.
pub struct MemoryImageStore {
    entries: DashMap<String, ImageEntry>,
    clock: Arc<dyn Clock>,
    retention: TimeDelta,
}

impl MemoryImageStore {
    pub fn new(clock: Arc<dyn Clock>, retention: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
            retention: TimeDelta::from_std(retention).unwrap_or(TimeDelta::MAX),
        }
    }

    /// Evicts entries older than the retention window. Returns how many went.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| now.signed_duration_since(entry.created_at) <= self.retention);
        let evicted = before.saturating_sub(self.entries.len());
        if evicted > 0 {
            debug!(evicted, remaining = self.entries.len(), "swept expired images");
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn put(&self, payload: Vec<u8>, mime_type: &str) -> Result<StoredImage, GenuiError> {
        let now = self.clock.now();
        let id = generate_image_id(now);

        self.sweep();

        debug!(image_id = %id, bytes = payload.len(), mime_type, "caching image");
        self.entries.insert(
            id.clone(),
            ImageEntry {
                id: id.clone(),
                payload,
                mime_type: mime_type.to_string(),
                created_at: now,
            },
        );

        Ok(StoredImage {
            url: format!("{IMAGE_URL_PREFIX}{id}"),
            id,
        })
    }

    async fn get(&self, id: &str) -> Result<Option<ImageEntry>, GenuiError> {
        Ok(self.entries.get(id).map(|entry| entry.value().clone()))
    }

    async fn health_check(&self) -> Result<HealthStatus, GenuiError> {
        Ok(HealthStatus::Healthy)
    }
}
