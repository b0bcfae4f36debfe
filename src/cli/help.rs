//! CLI help and command-name contract for logging spans.

use crate::cli::parse::Commands;

/// Stable command name (e.g. "list", "export") used as the span name field.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::List { .. } => "list",
        Commands::Add { .. } => "add",
        Commands::Update { .. } => "update",
        Commands::Delete { .. } => "delete",
        Commands::Export { .. } => "export",
        Commands::Status { .. } => "status",
        Commands::Init { .. } => "init",
    }
}
