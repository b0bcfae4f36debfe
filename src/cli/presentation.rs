//! CLI presentation: text and json formatters per command family.

mod frames;
mod status;

pub use frames::{
    format_added, format_deleted, format_exported, format_table_view_json,
    format_table_view_text, format_updated,
};
pub use status::{format_status_json, format_status_text, CollectionSummary};
