//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to the frame store.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_added, format_deleted, format_exported, format_status_json, format_status_text,
    format_table_view_json, format_table_view_text, format_updated, CollectionSummary,
};
pub use route::RunContext;
