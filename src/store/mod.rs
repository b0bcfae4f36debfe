//! Frame backends
//!
//! Raw row storage underneath the frame store. A backend hands back every row
//! of a collection in storage order, including rows it cannot make sense of;
//! the frame store decides what to do with those.

pub mod memory;
pub mod persistence;
pub mod snapshot;

pub use memory::MemoryFrameBackend;
pub use persistence::SledFrameBackend;
pub use snapshot::{Snapshot, SnapshotCache};

use crate::error::StorageError;
use crate::frame::{Collection, Frame, FrameId, Status};
use serde::{Deserialize, Serialize};

/// On-disk row body. Both columns are optional so that rows written by other
/// tools (or damaged rows) still decode far enough to be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRow {
    #[serde(default, rename = "Frame Name")]
    pub name: Option<String>,
    #[serde(default, rename = "Status")]
    pub status: Option<String>,
}

impl StoredRow {
    pub fn new(name: &str, status: Status) -> Self {
        Self {
            name: Some(name.to_string()),
            status: Some(status.as_str().to_string()),
        }
    }

    /// Validate into a frame, or describe why the row is unusable.
    pub fn into_frame(self, id: FrameId) -> Result<Frame, MalformedRow> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(MalformedRow::new(id, "missing frame name")),
        };
        let status = match self.status.as_deref() {
            Some(raw) if !raw.is_empty() => raw
                .parse::<Status>()
                .map_err(|_| MalformedRow::new(id, format!("unknown status '{}'", raw)))?,
            _ => return Err(MalformedRow::new(id, "missing status")),
        };
        Ok(Frame { id, name, status })
    }
}

/// A row that could not be turned into a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRow {
    pub id: Option<FrameId>,
    pub reason: String,
}

impl MalformedRow {
    pub fn new(id: FrameId, reason: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            reason: reason.into(),
        }
    }
}

/// One row as seen by a collection scan.
pub type ScannedRow = Result<Frame, MalformedRow>;

/// Result of a uniqueness-checked insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(FrameId),
    Duplicate,
}

/// Frame backend interface
///
/// Implementations own id allocation and must never hand out an id twice for
/// the same collection. `insert_unique` must perform its name check and write
/// without another insert into the same collection interleaving.
pub trait FrameBackend: Send + Sync {
    /// Every row of the collection, in storage order.
    fn scan(&self, collection: Collection) -> Result<Vec<ScannedRow>, StorageError>;

    /// Insert unless a row with exactly this name already exists.
    fn insert_unique(
        &self,
        collection: Collection,
        name: &str,
        status: Status,
    ) -> Result<InsertOutcome, StorageError>;

    /// Overwrite a row in place. Returns `false` if the id is absent.
    fn replace(
        &self,
        collection: Collection,
        id: FrameId,
        name: &str,
        status: Status,
    ) -> Result<bool, StorageError>;

    /// Remove a row. Returns `false` if the id is absent.
    fn remove(&self, collection: Collection, id: FrameId) -> Result<bool, StorageError>;
}
