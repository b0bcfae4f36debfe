//! Durability of the sled backend across reopen

use frametrack::store::persistence::collection_tree_name;
use frametrack::store::SledFrameBackend;
use frametrack::{Collection, FrameStore, Status};
use tempfile::TempDir;

#[test]
fn test_frames_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let backend = SledFrameBackend::new(dir.path()).unwrap();
        let store = FrameStore::new(backend);
        store.add(Collection::DesignFrames, "Oak", Status::InHouse).unwrap();
        store.add(Collection::DesignFrames, "Elm", Status::OutHouse).unwrap();
        store.backend().flush().unwrap();
    }

    let store = FrameStore::new(SledFrameBackend::new(dir.path()).unwrap());
    let names: Vec<String> = store
        .list(Collection::DesignFrames)
        .unwrap()
        .frames
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["Oak".to_string(), "Elm".to_string()]);
}

#[test]
fn test_ids_never_reused_across_reopen() {
    let dir = TempDir::new().unwrap();
    let deleted = {
        let store = FrameStore::new(SledFrameBackend::new(dir.path()).unwrap());
        let a = store.add(Collection::BpFrames, "a", Status::InHouse).unwrap();
        let b = store.add(Collection::BpFrames, "b", Status::InHouse).unwrap();
        store.delete(Collection::BpFrames, b.id).unwrap();
        store.backend().flush().unwrap();
        assert!(b.id > a.id);
        b.id
    };

    let store = FrameStore::new(SledFrameBackend::new(dir.path()).unwrap());
    let c = store.add(Collection::BpFrames, "c", Status::InHouse).unwrap();
    assert!(c.id > deleted);
}

#[test]
fn test_malformed_rows_are_skipped_and_counted() {
    let dir = TempDir::new().unwrap();
    let backend = SledFrameBackend::new(dir.path()).unwrap();
    let tree = backend
        .db()
        .open_tree(collection_tree_name(Collection::DesignFrames))
        .unwrap();
    tree.insert(100u64.to_be_bytes(), br#"{"Frame Name":"No status"}"#.to_vec())
        .unwrap();
    tree.insert(101u64.to_be_bytes(), br#"{"Frame Name":"Bad","Status":"Lost"}"#.to_vec())
        .unwrap();
    tree.insert(102u64.to_be_bytes(), br#"{"Frame Name":"Fine","Status":"InRepair"}"#.to_vec())
        .unwrap();

    let store = FrameStore::new(backend);
    let snapshot = store.list(Collection::DesignFrames).unwrap();
    assert_eq!(snapshot.skipped, 2);
    assert_eq!(snapshot.frames.len(), 1);
    assert_eq!(snapshot.frames[0].name, "Fine");

    // A malformed row's name still blocks adding the same name.
    assert!(store
        .add(Collection::DesignFrames, "No status", Status::InHouse)
        .is_err());
}
