//! Frame Tracker: inventory of named frames and their whereabouts.
//!
//! A small record store for two independent collections of frames, each
//! frame carrying a name that is unique within its collection and one of
//! three statuses. Listings are full snapshots; search, status filtering
//! and pagination run in memory over a snapshot.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod frame;
pub mod logging;
pub mod query;
pub mod store;
pub mod views;

pub use api::FrameStore;
pub use error::{ApiError, StorageError};
pub use frame::{Collection, Frame, FrameId, Status, StatusFilter};
