//! Workspace configuration loading

use frametrack::config::{workspace_config_path, ConfigLoader, TrackerConfig};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_workspace_config_file_is_applied() {
    let workspace = TempDir::new().unwrap();
    let path = workspace_config_path(workspace.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        "[storage]\nstore_path = \"data/frames\"\n\n[cache]\nttl_secs = 0\n",
    )
    .unwrap();

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.storage.store_path, PathBuf::from("data/frames"));
    assert_eq!(config.cache.ttl_secs, 0);

    let (store, _) = config.storage.resolve_paths(workspace.path());
    assert_eq!(store, workspace.path().join("data/frames"));
}

#[test]
fn test_init_output_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, TrackerConfig::default().to_toml().unwrap()).unwrap();

    let loaded = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(loaded, TrackerConfig::default());
}

#[test]
fn test_invalid_page_size_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[view]\npage_size = 0\n").unwrap();

    let loaded = ConfigLoader::load_from_file(&path).unwrap();
    assert!(loaded.ensure_valid().is_err());
}
