//! Frame status enumeration and the status filter used by listings.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a frame currently is. The literals are part of the storage and
/// export format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    InHouse,
    OutHouse,
    InRepair,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::InHouse, Status::OutHouse, Status::InRepair];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InHouse => "InHouse",
            Status::OutHouse => "OutHouse",
            Status::InRepair => "InRepair",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ApiError;

    /// Exact match on the literal; anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "InHouse" => Ok(Status::InHouse),
            "OutHouse" => Ok(Status::OutHouse),
            "InRepair" => Ok(Status::InRepair),
            other => Err(ApiError::InvalidStatus(other.to_string())),
        }
    }
}

/// Status filter with an "All" sentinel that disables filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => status.fmt(f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}
