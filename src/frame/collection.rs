//! The two well-known frame collections.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    DesignFrames,
    BpFrames,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::DesignFrames, Collection::BpFrames];

    /// Stable identifier, used in storage keys and export file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::DesignFrames => "design_frames",
            Collection::BpFrames => "bp_frames",
        }
    }

    /// Worksheet name used inside exported workbooks.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Collection::DesignFrames => "Sheet1",
            Collection::BpFrames => "Sheet2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Collection::DesignFrames => "Design Frame Tracker",
            Collection::BpFrames => "BP Frame Tracker",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "design_frames" => Ok(Collection::DesignFrames),
            "bp_frames" => Ok(Collection::BpFrames),
            other => Err(ApiError::UnknownCollection(other.to_string())),
        }
    }
}
