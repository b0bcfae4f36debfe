//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain errors to the line printed on stderr.
///
/// Stale-handle errors get a hint, since another client may have removed the frame.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::NotFound { collection, .. } => format!(
            "{}\nRun `frametrack list {}` to see current frames.",
            e, collection
        ),
        _ => e.to_string(),
    }
}
