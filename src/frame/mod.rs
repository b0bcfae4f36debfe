//! Frame records and the closed value sets they are built from.

pub mod collection;
pub mod id;
pub mod status;

pub use collection::Collection;
pub use id::FrameId;
pub use status::{Status, StatusFilter};

use serde::{Deserialize, Serialize};

/// One inventory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub id: FrameId,
    pub name: String,
    pub status: Status,
}

impl Frame {
    pub fn new(id: FrameId, name: impl Into<String>, status: Status) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }
}

/// Trim a frame name, rejecting names that are empty once trimmed.
pub fn normalize_name(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
