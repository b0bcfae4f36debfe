//! In-memory frame backend. Nothing survives the process; used for tests and
//! throwaway sessions.

use crate::error::StorageError;
use crate::frame::{Collection, FrameId, Status};
use crate::store::{FrameBackend, InsertOutcome, ScannedRow, StoredRow};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

#[derive(Default)]
struct Partition {
    rows: BTreeMap<FrameId, StoredRow>,
    last_id: u64,
}

impl Partition {
    fn next_id(&mut self) -> FrameId {
        self.last_id += 1;
        FrameId::new(self.last_id)
    }
}

#[derive(Default)]
pub struct MemoryFrameBackend {
    partitions: RwLock<HashMap<Collection, Partition>>,
}

impl MemoryFrameBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw row under a freshly allocated id, bypassing validation.
    pub fn insert_raw(&self, collection: Collection, row: StoredRow) -> FrameId {
        let mut partitions = self.partitions.write();
        let partition = partitions.entry(collection).or_default();
        let id = partition.next_id();
        partition.rows.insert(id, row);
        id
    }
}

impl FrameBackend for MemoryFrameBackend {
    fn scan(&self, collection: Collection) -> Result<Vec<ScannedRow>, StorageError> {
        let partitions = self.partitions.read();
        Ok(partitions
            .get(&collection)
            .map(|p| {
                p.rows
                    .iter()
                    .map(|(id, row)| row.clone().into_frame(*id))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn insert_unique(
        &self,
        collection: Collection,
        name: &str,
        status: Status,
    ) -> Result<InsertOutcome, StorageError> {
        let mut partitions = self.partitions.write();
        let partition = partitions.entry(collection).or_default();
        if partition
            .rows
            .values()
            .any(|row| row.name.as_deref() == Some(name))
        {
            return Ok(InsertOutcome::Duplicate);
        }
        let id = partition.next_id();
        partition.rows.insert(id, StoredRow::new(name, status));
        Ok(InsertOutcome::Inserted(id))
    }

    fn replace(
        &self,
        collection: Collection,
        id: FrameId,
        name: &str,
        status: Status,
    ) -> Result<bool, StorageError> {
        let mut partitions = self.partitions.write();
        match partitions
            .get_mut(&collection)
            .and_then(|p| p.rows.get_mut(&id))
        {
            Some(row) => {
                *row = StoredRow::new(name, status);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, collection: Collection, id: FrameId) -> Result<bool, StorageError> {
        let mut partitions = self.partitions.write();
        Ok(partitions
            .get_mut(&collection)
            .map(|p| p.rows.remove(&id).is_some())
            .unwrap_or(false))
    }
}
