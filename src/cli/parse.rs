//! CLI parse: clap types for frametrack. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// frametrack - track design and BP frames
#[derive(Parser)]
#[command(name = "frametrack")]
#[command(about = "Inventory tracker for named frames and their whereabouts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List frames of a collection, one page at a time
    List {
        /// Collection (design_frames or bp_frames)
        collection: String,
        /// Fuzzy search on frame name
        #[arg(long, default_value = "")]
        search: String,
        /// Status filter (All, InHouse, OutHouse, InRepair)
        #[arg(long, default_value = "All")]
        status: String,
        /// Page number (1-based; clamped to the available pages)
        #[arg(long, default_value = "1")]
        page: usize,
        /// Items per page (defaults to view.page_size)
        #[arg(long)]
        page_size: Option<usize>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Add a frame
    Add {
        collection: String,
        /// Frame name (surrounding whitespace is trimmed)
        name: String,
        #[arg(long, default_value = "InHouse")]
        status: String,
    },
    /// Change the name and/or status of a frame
    Update {
        collection: String,
        /// Frame id as shown by `list`
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a frame
    Delete {
        collection: String,
        /// Frame id as shown by `list`
        id: String,
    },
    /// Export a collection to a spreadsheet file
    Export {
        collection: String,
        /// File format (xlsx or csv)
        #[arg(long, default_value = "xlsx")]
        format: String,
        /// Output directory (defaults to storage.export_dir)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Show per-collection counts by status
    Status {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Write a default config/config.toml into the workspace
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
