//! Sled-backed frame storage
//!
//! One sled tree per collection, keyed by big-endian frame id so iteration
//! order is creation order. Row bodies are JSON `StoredRow`s. Id counters
//! live in a separate meta tree and only ever move forward.

use crate::error::StorageError;
use crate::frame::{Collection, FrameId, Status};
use crate::store::{FrameBackend, InsertOutcome, MalformedRow, ScannedRow, StoredRow};
use parking_lot::Mutex;
use sled::{Db, Tree};
use std::io;
use std::path::Path;
use tracing::debug;

const TREE_META: &str = "frame_meta";
const NEXT_ID_PREFIX: &str = "next_id:";

/// Name of the sled tree holding a collection's rows.
pub fn collection_tree_name(collection: Collection) -> String {
    format!("frames:{}", collection.as_str())
}

pub struct SledFrameBackend {
    db: Db,
    design_frames: Tree,
    bp_frames: Tree,
    meta: Tree,
    insert_lock: Mutex<()>,
}

impl SledFrameBackend {
    /// Open (or create) a store at the given directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = sled::open(path).map_err(|e| {
            StorageError::Unavailable(format!("Failed to open sled database: {}", e))
        })?;
        Self::from_db(db)
    }

    pub fn from_db(db: Db) -> Result<Self, StorageError> {
        let design_frames = db
            .open_tree(collection_tree_name(Collection::DesignFrames))
            .map_err(to_storage_io)?;
        let bp_frames = db
            .open_tree(collection_tree_name(Collection::BpFrames))
            .map_err(to_storage_io)?;
        let meta = db.open_tree(TREE_META).map_err(to_storage_io)?;
        Ok(Self {
            db,
            design_frames,
            bp_frames,
            meta,
            insert_lock: Mutex::new(()),
        })
    }

    /// Get the underlying sled database (for advanced operations)
    pub fn db(&self) -> &Db {
        &self.db
    }

    /// Flush all pending writes to disk
    pub fn flush(&self) -> Result<(), StorageError> {
        self.db.flush().map_err(to_storage_io)?;
        Ok(())
    }

    fn tree(&self, collection: Collection) -> &Tree {
        match collection {
            Collection::DesignFrames => &self.design_frames,
            Collection::BpFrames => &self.bp_frames,
        }
    }

    fn allocate_id(&self, collection: Collection) -> Result<FrameId, StorageError> {
        let key = format!("{}{}", NEXT_ID_PREFIX, collection.as_str());
        let updated = self
            .meta
            .update_and_fetch(key.as_bytes(), |old| {
                let current = old.and_then(|raw| FrameId::from_key(raw)).map_or(0, |id| id.get());
                Some(FrameId::new(current + 1).to_key().to_vec())
            })
            .map_err(to_storage_io)?;
        updated
            .as_deref()
            .and_then(FrameId::from_key)
            .ok_or_else(|| StorageError::Corrupt(format!("id counter for {}", collection)))
    }
}

impl FrameBackend for SledFrameBackend {
    fn scan(&self, collection: Collection) -> Result<Vec<ScannedRow>, StorageError> {
        let mut rows = Vec::new();
        for item in self.tree(collection).iter() {
            let (key, value) = item.map_err(to_storage_io)?;
            let Some(id) = FrameId::from_key(&key) else {
                rows.push(Err(MalformedRow {
                    id: None,
                    reason: format!("unrecognised key of {} bytes", key.len()),
                }));
                continue;
            };
            let row = match serde_json::from_slice::<StoredRow>(&value) {
                Ok(row) => row.into_frame(id),
                Err(e) => Err(MalformedRow::new(id, format!("undecodable row: {}", e))),
            };
            rows.push(row);
        }
        Ok(rows)
    }

    fn insert_unique(
        &self,
        collection: Collection,
        name: &str,
        status: Status,
    ) -> Result<InsertOutcome, StorageError> {
        let _guard = self.insert_lock.lock();
        let tree = self.tree(collection);

        for item in tree.iter() {
            let (_, value) = item.map_err(to_storage_io)?;
            // Undecodable rows cannot hold a name, so they never block an insert.
            if let Ok(existing) = serde_json::from_slice::<StoredRow>(&value) {
                if existing.name.as_deref() == Some(name) {
                    return Ok(InsertOutcome::Duplicate);
                }
            }
        }

        let id = self.allocate_id(collection)?;
        let value = serde_json::to_vec(&StoredRow::new(name, status)).map_err(to_storage_data)?;
        tree.insert(id.to_key(), value).map_err(to_storage_io)?;
        debug!(collection = %collection, id = %id, "Inserted frame row");
        Ok(InsertOutcome::Inserted(id))
    }

    fn replace(
        &self,
        collection: Collection,
        id: FrameId,
        name: &str,
        status: Status,
    ) -> Result<bool, StorageError> {
        let value = serde_json::to_vec(&StoredRow::new(name, status)).map_err(to_storage_data)?;
        // Only overwrite a row that is still present; a concurrent delete wins.
        let previous = self
            .tree(collection)
            .fetch_and_update(id.to_key(), |old| old.map(|_| value.clone()))
            .map_err(to_storage_io)?;
        Ok(previous.is_some())
    }

    fn remove(&self, collection: Collection, id: FrameId) -> Result<bool, StorageError> {
        let removed = self
            .tree(collection)
            .remove(id.to_key())
            .map_err(to_storage_io)?;
        Ok(removed.is_some())
    }
}

fn to_storage_io(err: sled::Error) -> StorageError {
    StorageError::IoError(io::Error::new(io::ErrorKind::Other, err.to_string()))
}

fn to_storage_data(err: serde_json::Error) -> StorageError {
    StorageError::IoError(io::Error::new(io::ErrorKind::InvalidData, err.to_string()))
}
