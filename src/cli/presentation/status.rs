//! Collection status summary.

use crate::error::ApiError;
use crate::frame::{Collection, Status};
use crate::store::Snapshot;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CollectionSummary {
    pub collection: Collection,
    pub label: &'static str,
    pub total: usize,
    pub in_house: usize,
    pub out_house: usize,
    pub in_repair: usize,
    pub skipped: usize,
}

impl CollectionSummary {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            collection: snapshot.collection,
            label: snapshot.collection.label(),
            total: snapshot.len(),
            in_house: snapshot.count_status(Status::InHouse),
            out_house: snapshot.count_status(Status::OutHouse),
            in_repair: snapshot.count_status(Status::InRepair),
            skipped: snapshot.skipped,
        }
    }
}

pub fn format_status_text(summaries: &[CollectionSummary]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        "Collection",
        "Total",
        "InHouse",
        "OutHouse",
        "InRepair",
        "Skipped",
    ]);
    for s in summaries {
        table.add_row(vec![
            s.collection.to_string(),
            s.total.to_string(),
            s.in_house.to_string(),
            s.out_house.to_string(),
            s.in_repair.to_string(),
            s.skipped.to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_status_json(summaries: &[CollectionSummary]) -> Result<String, ApiError> {
    let out = serde_json::json!({ "collections": summaries });
    serde_json::to_string_pretty(&out)
        .map_err(|e| ApiError::StoreUnavailable(format!("Failed to encode status: {}", e)))
}
