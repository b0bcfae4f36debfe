//! Collection snapshots and their short-lived memoization.

use crate::frame::{Collection, Frame, Status};
use crate::store::ScannedRow;
use blake3::Hasher;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Full list of well-formed frames of a collection as of one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub collection: Collection,
    pub frames: Vec<Frame>,
    /// Rows skipped because they were missing a name or a valid status.
    pub skipped: usize,
    /// Hex blake3 digest of the well-formed rows, for change detection.
    pub digest: String,
}

impl Snapshot {
    /// Split scanned rows into frames and a skip count. Storage order is kept.
    pub fn from_rows(collection: Collection, rows: Vec<ScannedRow>) -> Self {
        let mut frames = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;
        for row in rows {
            match row {
                Ok(frame) => frames.push(frame),
                Err(malformed) => {
                    skipped += 1;
                    warn!(
                        collection = %collection,
                        id = ?malformed.id.map(|id| id.get()),
                        reason = %malformed.reason,
                        "Skipping malformed frame row"
                    );
                }
            }
        }
        let digest = compute_digest(&frames);
        Self {
            collection,
            frames,
            skipped,
            digest,
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn count_status(&self, status: Status) -> usize {
        self.frames.iter().filter(|f| f.status == status).count()
    }
}

/// digest = blake3(for each frame: id || len(name) || name || status)
pub fn compute_digest(frames: &[Frame]) -> String {
    let mut hasher = Hasher::new();
    for frame in frames {
        hasher.update(&frame.id.to_key());
        hasher.update(&(frame.name.len() as u64).to_be_bytes());
        hasher.update(frame.name.as_bytes());
        hasher.update(frame.status.as_str().as_bytes());
    }
    hex::encode(hasher.finalize().as_bytes())
}

/// Per-collection snapshot memo with a fixed time-to-live.
///
/// A TTL of zero disables memoization entirely.
pub struct SnapshotCache {
    ttl: Duration,
    entries: Mutex<HashMap<Collection, (Instant, Snapshot)>>,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self, collection: Collection) -> Option<Snapshot> {
        self.get_at(collection, Instant::now())
    }

    fn get_at(&self, collection: Collection, now: Instant) -> Option<Snapshot> {
        if self.ttl.is_zero() {
            return None;
        }
        let mut entries = self.entries.lock();
        let fresh = entries
            .get(&collection)
            .filter(|(stored_at, _)| now.duration_since(*stored_at) < self.ttl)
            .map(|(_, snapshot)| snapshot.clone());
        if fresh.is_none() {
            entries.remove(&collection);
        }
        fresh
    }

    pub fn put(&self, snapshot: &Snapshot) {
        self.put_at(snapshot, Instant::now());
    }

    fn put_at(&self, snapshot: &Snapshot, now: Instant) {
        if self.ttl.is_zero() {
            return;
        }
        self.entries
            .lock()
            .insert(snapshot.collection, (now, snapshot.clone()));
    }

    pub fn invalidate(&self, collection: Collection) {
        self.entries.lock().remove(&collection);
    }
}
