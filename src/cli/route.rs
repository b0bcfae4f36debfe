//! CLI route: single route table and run context. Dispatches to the frame
//! store, the view renderer and presentation.

use crate::api::FrameStore;
use crate::config::{workspace_config_path, ConfigLoader, TrackerConfig};
use crate::error::ApiError;
use crate::export::ExportFormat;
use crate::frame::{Collection, FrameId, Status, StatusFilter};
use crate::store::SledFrameBackend;
use crate::views::{render, ViewEvent, ViewState};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info_span};

use crate::cli::command_name;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_added, format_deleted, format_exported, format_status_json, format_status_text,
    format_table_view_json, format_table_view_text, format_updated, CollectionSummary,
};

/// Runtime context for CLI execution: workspace, resolved config and the store.
pub struct RunContext {
    store: FrameStore<SledFrameBackend>,
    config: TrackerConfig,
    workspace_root: PathBuf,
    export_dir: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        config.ensure_valid()?;

        let (store_path, export_dir) = config.storage.resolve_paths(&workspace_root);
        std::fs::create_dir_all(&store_path).map_err(|e| {
            ApiError::StoreUnavailable(format!(
                "Failed to create store directory {}: {}",
                store_path.display(),
                e
            ))
        })?;
        let backend = SledFrameBackend::new(&store_path)?;
        let store = FrameStore::with_cache_ttl(backend, config.cache.ttl());

        Ok(Self {
            store,
            config,
            workspace_root,
            export_dir,
        })
    }

    pub fn store(&self) -> &FrameStore<SledFrameBackend> {
        &self.store
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let span = info_span!("command", name = command_name(command));
        let _enter = span.enter();
        let started = Instant::now();
        let result = self.execute_inner(command);
        if let Err(e) = self.store.backend().flush() {
            tracing::warn!("Failed to flush store: {}", e);
        }
        debug!(
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::List {
                collection,
                search,
                status,
                page,
                page_size,
                format,
            } => {
                let collection: Collection = collection.parse()?;
                let filter: StatusFilter = status.parse()?;
                let page_size = page_size.unwrap_or(self.config.view.page_size);
                let state = ViewState::new(collection, page_size)
                    .apply(ViewEvent::Search(search.clone()))
                    .apply(ViewEvent::FilterStatus(filter))
                    .apply(ViewEvent::GoToPage(*page));
                let (view, _) = render(&self.store, &state)?;
                match format.as_str() {
                    "text" => Ok(format_table_view_text(&view)),
                    "json" => format_table_view_json(&view),
                    _ => Err(invalid_format(format)),
                }
            }
            Commands::Add {
                collection,
                name,
                status,
            } => {
                let collection: Collection = collection.parse()?;
                let status: Status = status.parse()?;
                let frame = self.store.add(collection, name, status)?;
                Ok(format_added(&frame))
            }
            Commands::Update {
                collection,
                id,
                name,
                status,
            } => {
                let collection: Collection = collection.parse()?;
                let id = parse_id(id)?;
                let current = self.store.get(collection, id)?;
                let new_name = name.clone().unwrap_or(current.name);
                let new_status = match status {
                    Some(s) => s.parse::<Status>()?,
                    None => current.status,
                };
                self.store.update(collection, id, &new_name, new_status)?;
                let updated = self.store.get(collection, id)?;
                Ok(format_updated(&updated))
            }
            Commands::Delete { collection, id } => {
                let collection: Collection = collection.parse()?;
                let id = parse_id(id)?;
                // Malformed rows are not visible to `get` but can still be deleted.
                let name = self.store.get(collection, id).ok().map(|frame| frame.name);
                self.store.delete(collection, id)?;
                Ok(format_deleted(id, name.as_deref()))
            }
            Commands::Export {
                collection,
                format,
                out_dir,
            } => {
                let collection: Collection = collection.parse()?;
                let format: ExportFormat = format.parse()?;
                let dir = out_dir.clone().unwrap_or_else(|| self.export_dir.clone());
                let path = self.store.export(collection, &dir, format)?;
                Ok(format_exported(&path))
            }
            Commands::Status { format } => {
                if format != "text" && format != "json" {
                    return Err(invalid_format(format));
                }
                let mut summaries = Vec::with_capacity(Collection::ALL.len());
                for collection in Collection::ALL {
                    let snapshot = self.store.list(collection)?;
                    summaries.push(CollectionSummary::from_snapshot(&snapshot));
                }
                match format.as_str() {
                    "json" => format_status_json(&summaries),
                    _ => Ok(format_status_text(&summaries)),
                }
            }
            Commands::Init { force } => {
                let path = workspace_config_path(&self.workspace_root);
                if path.exists() && !force {
                    return Ok(format!(
                        "Config already exists at {} (use --force to overwrite)",
                        path.display()
                    ));
                }
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        ApiError::ConfigError(format!("Failed to create config directory: {}", e))
                    })?;
                }
                std::fs::write(&path, TrackerConfig::default().to_toml()?).map_err(|e| {
                    ApiError::ConfigError(format!("Failed to write {}: {}", path.display(), e))
                })?;
                Ok(format!("Wrote {}", path.display()))
            }
        }
    }
}

fn invalid_format(format: &str) -> ApiError {
    ApiError::ConfigError(format!(
        "Invalid format: '{}'. Must be 'text' or 'json'.",
        format
    ))
}

fn parse_id(raw: &str) -> Result<FrameId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}
