//! Export files written through the frame store

use frametrack::export::ExportFormat;
use frametrack::store::persistence::collection_tree_name;
use frametrack::store::{MemoryFrameBackend, SledFrameBackend, StoredRow};
use frametrack::{Collection, FrameStore, Status};
use tempfile::TempDir;

#[test]
fn test_xlsx_export_named_after_collection() {
    let dir = TempDir::new().unwrap();
    let store = FrameStore::new(MemoryFrameBackend::new());
    store.add(Collection::BpFrames, "Sheet101", Status::InHouse).unwrap();

    let path = store
        .export(Collection::BpFrames, dir.path(), ExportFormat::Xlsx)
        .unwrap();

    let file_name = path.file_name().unwrap().to_str().unwrap();
    assert!(file_name.starts_with("bp_frames_"), "got {}", file_name);
    assert!(file_name.ends_with(".xlsx"));
    // bp_frames_YYYYmmdd_HHMMSS.xlsx
    assert_eq!(file_name.len(), "bp_frames_".len() + 15 + ".xlsx".len());
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_csv_export_has_name_and_status_only() {
    let dir = TempDir::new().unwrap();
    let store = FrameStore::new(MemoryFrameBackend::new());
    store.add(Collection::DesignFrames, "Oak", Status::InHouse).unwrap();
    store.add(Collection::DesignFrames, "Elm", Status::InRepair).unwrap();

    let path = store
        .export(Collection::DesignFrames, dir.path(), ExportFormat::Csv)
        .unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(text, "Frame Name,Status\nOak,InHouse\nElm,InRepair\n");
}

#[test]
fn test_csv_export_leaves_out_malformed_rows() {
    let dir = TempDir::new().unwrap();
    let store = FrameStore::new(MemoryFrameBackend::new());
    let c = Collection::DesignFrames;
    store.add(c, "Oak", Status::InHouse).unwrap();
    store.backend().insert_raw(
        c,
        StoredRow {
            name: Some("Ghost".to_string()),
            status: Some("Lost".to_string()),
        },
    );
    store.backend().insert_raw(
        c,
        StoredRow {
            name: None,
            status: Some("InHouse".to_string()),
        },
    );
    store.add(c, "Elm", Status::OutHouse).unwrap();

    let path = store.export(c, dir.path(), ExportFormat::Csv).unwrap();
    let text = std::fs::read_to_string(path).unwrap();
    assert_eq!(text, "Frame Name,Status\nOak,InHouse\nElm,OutHouse\n");
}

#[test]
fn test_export_skips_undecodable_sled_rows() {
    let dir = TempDir::new().unwrap();
    let backend = SledFrameBackend::new(dir.path().join("store")).unwrap();
    let c = Collection::BpFrames;
    let tree = backend.db().open_tree(collection_tree_name(c)).unwrap();
    tree.insert(7u64.to_be_bytes(), b"not json".to_vec()).unwrap();

    let store = FrameStore::new(backend);
    store.add(c, "Pine", Status::InRepair).unwrap();
    let path = store
        .export(c, &dir.path().join("exports"), ExportFormat::Csv)
        .unwrap();
    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "Frame Name,Status\nPine,InRepair\n"
    );
}

#[test]
fn test_repeated_exports_get_fresh_paths() {
    let dir = TempDir::new().unwrap();
    let store = FrameStore::new(MemoryFrameBackend::new());
    let first = store
        .export(Collection::DesignFrames, dir.path(), ExportFormat::Csv)
        .unwrap();
    let second = store
        .export(Collection::DesignFrames, dir.path(), ExportFormat::Csv)
        .unwrap();
    assert_ne!(first, second);
    assert!(first.exists() && second.exists());
}

#[test]
fn test_export_into_unwritable_location_fails() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, b"file").unwrap();

    let store = FrameStore::new(MemoryFrameBackend::new());
    let err = store
        .export(Collection::DesignFrames, &blocker, ExportFormat::Xlsx)
        .unwrap_err();
    assert!(matches!(err, frametrack::ApiError::Export(_)));
}
