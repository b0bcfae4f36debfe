//! Frame Store API
//!
//! The authoritative list/add/update/delete/export surface over a frame
//! backend. Every read returns a full snapshot; callers run search, status
//! filtering and pagination (see [`crate::query`]) over that snapshot.
//!
//! Snapshots may be memoized for a short TTL. Every mutation invalidates the
//! memoized snapshot of its collection before returning, whether or not the
//! mutation succeeded.

use crate::error::ApiError;
use crate::export::{write_export, ExportFormat};
use crate::frame::{normalize_name, Collection, Frame, FrameId, Status};
use crate::store::{FrameBackend, InsertOutcome, Snapshot, SnapshotCache};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct FrameStore<B: FrameBackend> {
    backend: B,
    cache: SnapshotCache,
}

impl<B: FrameBackend> FrameStore<B> {
    /// Store without snapshot memoization.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: SnapshotCache::disabled(),
        }
    }

    /// Store that memoizes snapshots for `ttl` (zero disables memoization).
    pub fn with_cache_ttl(backend: B, ttl: Duration) -> Self {
        Self {
            backend,
            cache: SnapshotCache::new(ttl),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Every well-formed frame of the collection, in storage order.
    pub fn list(&self, collection: Collection) -> Result<Snapshot, ApiError> {
        if let Some(snapshot) = self.cache.get(collection) {
            debug!(collection = %collection, "Serving memoized snapshot");
            return Ok(snapshot);
        }
        let snapshot = self.fetch(collection)?;
        self.cache.put(&snapshot);
        Ok(snapshot)
    }

    /// Look up a single frame by id.
    pub fn get(&self, collection: Collection, id: FrameId) -> Result<Frame, ApiError> {
        self.list(collection)?
            .frames
            .into_iter()
            .find(|frame| frame.id == id)
            .ok_or(ApiError::NotFound { collection, id })
    }

    /// Whether the collection's content differs from a previously seen digest.
    pub fn has_changed(&self, collection: Collection, last_digest: &str) -> Result<bool, ApiError> {
        Ok(self.fetch(collection)?.digest != last_digest)
    }

    /// Add a frame. The name is trimmed and must be unique in the collection.
    pub fn add(&self, collection: Collection, name: &str, status: Status) -> Result<Frame, ApiError> {
        let name = normalize_name(name).ok_or(ApiError::EmptyName)?;
        let outcome = self.backend.insert_unique(collection, name, status);
        self.cache.invalidate(collection);

        match outcome? {
            InsertOutcome::Inserted(id) => {
                info!(collection = %collection, id = %id, name = name, status = %status, "Frame added");
                Ok(Frame::new(id, name, status))
            }
            InsertOutcome::Duplicate => {
                warn!(collection = %collection, name = name, "Rejected duplicate frame name");
                Err(ApiError::DuplicateName(name.to_string()))
            }
        }
    }

    /// Overwrite name and status of an existing frame.
    ///
    /// The new name is not checked against other frames in the collection.
    pub fn update(
        &self,
        collection: Collection,
        id: FrameId,
        new_name: &str,
        new_status: Status,
    ) -> Result<(), ApiError> {
        let name = normalize_name(new_name).ok_or(ApiError::EmptyName)?;
        let replaced = self.backend.replace(collection, id, name, new_status);
        self.cache.invalidate(collection);

        if replaced? {
            info!(collection = %collection, id = %id, name = name, status = %new_status, "Frame updated");
            Ok(())
        } else {
            Err(ApiError::NotFound { collection, id })
        }
    }

    pub fn delete(&self, collection: Collection, id: FrameId) -> Result<(), ApiError> {
        let removed = self.backend.remove(collection, id);
        self.cache.invalidate(collection);

        if removed? {
            info!(collection = %collection, id = %id, "Frame deleted");
            Ok(())
        } else {
            Err(ApiError::NotFound { collection, id })
        }
    }

    /// Export the current collection to a fresh file under `dir`.
    pub fn export(
        &self,
        collection: Collection,
        dir: &Path,
        format: ExportFormat,
    ) -> Result<PathBuf, ApiError> {
        let snapshot = self.fetch(collection)?;
        write_export(&snapshot.frames, collection, dir, format, Local::now())
    }

    fn fetch(&self, collection: Collection) -> Result<Snapshot, ApiError> {
        let rows = self.backend.scan(collection)?;
        let snapshot = Snapshot::from_rows(collection, rows);
        debug!(
            collection = %collection,
            frames = snapshot.len(),
            skipped = snapshot.skipped,
            "Fetched snapshot"
        );
        Ok(snapshot)
    }
}
