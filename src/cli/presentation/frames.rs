//! Frame listing and mutation results.

use crate::error::ApiError;
use crate::frame::{Frame, FrameId, Status};
use crate::views::TableView;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use owo_colors::OwoColorize;
use std::path::Path;

fn status_cell(status: Status) -> Cell {
    let color = match status {
        Status::InHouse => Color::Green,
        Status::OutHouse => Color::Red,
        Status::InRepair => Color::DarkYellow,
    };
    Cell::new(status.as_str()).fg(color)
}

pub fn format_table_view_text(view: &TableView) -> String {
    let mut out = String::new();
    if let Some(message) = &view.message {
        out.push_str(&format!("{}\n\n", message.green()));
    }
    out.push_str(&format!(
        "{} ({} items)\n",
        view.label.bold(),
        view.page.total_items
    ));

    if view.page.items.is_empty() {
        out.push_str("No data available.\n");
    } else {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["ID", "Frame Name", "Status"]);
        for frame in &view.page.items {
            table.add_row(vec![
                Cell::new(frame.id),
                Cell::new(&frame.name),
                status_cell(frame.status),
            ]);
        }
        out.push_str(&table.to_string());
        out.push('\n');
    }

    out.push_str(&format!("Page {} of {}", view.page.page, view.page.total_pages));
    if view.skipped > 0 {
        out.push_str(&format!(
            "\n{}",
            format!("{} malformed row(s) skipped", view.skipped).yellow()
        ));
    }
    out
}

pub fn format_table_view_json(view: &TableView) -> Result<String, ApiError> {
    serde_json::to_string_pretty(view)
        .map_err(|e| ApiError::StoreUnavailable(format!("Failed to encode listing: {}", e)))
}

pub fn format_added(frame: &Frame) -> String {
    format!("Frame '{}' added (id {}, {}).", frame.name, frame.id, frame.status)
}

pub fn format_updated(frame: &Frame) -> String {
    format!(
        "Updated frame {}: '{}' is now {}.",
        frame.id, frame.name, frame.status
    )
}

/// `name` is unknown when the deleted row was malformed.
pub fn format_deleted(id: FrameId, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("Deleted: {}", name),
        None => format!("Deleted: frame {}", id),
    }
}

pub fn format_exported(path: &Path) -> String {
    path.display().to_string()
}
