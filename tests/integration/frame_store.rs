//! End-to-end frame store behaviour over the sled backend

use frametrack::export::ExportFormat;
use frametrack::query::{filter_by_status, paginate, search};
use frametrack::store::SledFrameBackend;
use frametrack::{ApiError, Collection, FrameStore, Status, StatusFilter};
use std::time::Duration;
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> FrameStore<SledFrameBackend> {
    let backend = SledFrameBackend::new(dir.path().join("store")).unwrap();
    FrameStore::with_cache_ttl(backend, Duration::from_secs(5))
}

/// Add, reject duplicate, update, list, delete, list, export header only.
#[test]
fn test_sheet101_lifecycle() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let c = Collection::DesignFrames;

    assert!(store.list(c).unwrap().is_empty());

    let frame = store.add(c, "Sheet101", Status::InHouse).unwrap();

    let err = store.add(c, "Sheet101", Status::OutHouse).unwrap_err();
    assert!(matches!(err, ApiError::DuplicateName(ref name) if name == "Sheet101"));

    store.update(c, frame.id, "Sheet101", Status::InRepair).unwrap();

    let frames = store.list(c).unwrap().frames;
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].name, "Sheet101");
    assert_eq!(frames[0].status, Status::InRepair);

    store.delete(c, frame.id).unwrap();
    assert!(store.list(c).unwrap().is_empty());

    let path = store
        .export(c, &dir.path().join("exports"), ExportFormat::Csv)
        .unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "Frame Name,Status\n");
}

#[test]
fn test_collections_do_not_share_names_or_rows() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);

    store.add(Collection::DesignFrames, "Oak", Status::InHouse).unwrap();
    store.add(Collection::BpFrames, "Oak", Status::OutHouse).unwrap();

    let design = store.list(Collection::DesignFrames).unwrap();
    let bp = store.list(Collection::BpFrames).unwrap();
    assert_eq!(design.frames[0].status, Status::InHouse);
    assert_eq!(bp.frames[0].status, Status::OutHouse);

    store.delete(Collection::BpFrames, bp.frames[0].id).unwrap();
    assert_eq!(store.list(Collection::DesignFrames).unwrap().len(), 1);
}

#[test]
fn test_repeated_delete_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let c = Collection::BpFrames;

    let frame = store.add(c, "Pine", Status::InHouse).unwrap();
    store.delete(c, frame.id).unwrap();
    assert!(matches!(
        store.delete(c, frame.id),
        Err(ApiError::NotFound { collection, id }) if collection == c && id == frame.id
    ));
    assert!(matches!(
        store.update(c, frame.id, "Pine", Status::OutHouse),
        Err(ApiError::NotFound { .. })
    ));
}

#[test]
fn test_listing_pipeline_over_store() {
    let dir = TempDir::new().unwrap();
    let store = open_store(&dir);
    let c = Collection::DesignFrames;

    for i in 0..15 {
        let status = if i % 3 == 0 { Status::InRepair } else { Status::InHouse };
        store.add(c, &format!("Jubilee-Red-{:02}", i), status).unwrap();
    }
    store.add(c, "Blue Ash", Status::InRepair).unwrap();

    let frames = store.list(c).unwrap().frames;
    let matched = search(frames, "red");
    assert_eq!(matched.len(), 15);

    let repairs = filter_by_status(matched, StatusFilter::Only(Status::InRepair));
    assert_eq!(repairs.len(), 5);

    let page = paginate(&repairs, 2, 3);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Jubilee-Red-12");
}
