//! Model-based test: random add/update/delete sequences against a plain Vec.

use frametrack::store::MemoryFrameBackend;
use frametrack::{ApiError, Collection, Frame, FrameStore, Status};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(String, Status),
    Update(usize, String, Status),
    Delete(usize),
}

fn status() -> impl Strategy<Value = Status> {
    prop_oneof![Just(Status::InHouse), Just(Status::OutHouse), Just(Status::InRepair)]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        ("[a-d]{1,2}", status()).prop_map(|(n, s)| Op::Add(n, s)),
        (0usize..8, "[a-d]{1,2}", status()).prop_map(|(i, n, s)| Op::Update(i, n, s)),
        (0usize..8).prop_map(Op::Delete),
    ]
}

proptest! {
    #[test]
    fn prop_store_matches_model(ops in proptest::collection::vec(op(), 0..40)) {
        let store = FrameStore::new(MemoryFrameBackend::new());
        let c = Collection::DesignFrames;
        let mut model: Vec<Frame> = Vec::new();

        for op in ops {
            match op {
                Op::Add(name, status) => {
                    let result = store.add(c, &name, status);
                    if model.iter().any(|f| f.name == name) {
                        let is_duplicate = matches!(result, Err(ApiError::DuplicateName(_)));
                        prop_assert!(is_duplicate);
                    } else {
                        let frame = result.unwrap();
                        prop_assert!(model.iter().all(|f| f.id < frame.id));
                        model.push(frame);
                    }
                }
                Op::Update(i, name, status) => {
                    if let Some(target) = model.get_mut(i) {
                        store.update(c, target.id, &name, status).unwrap();
                        target.name = name;
                        target.status = status;
                    }
                }
                Op::Delete(i) => {
                    if i < model.len() {
                        let frame = model.remove(i);
                        store.delete(c, frame.id).unwrap();
                        let is_missing = matches!(
                            store.delete(c, frame.id),
                            Err(ApiError::NotFound { .. })
                        );
                        prop_assert!(is_missing);
                    }
                }
            }
            prop_assert_eq!(store.list(c).unwrap().frames, model.clone());
        }
    }
}
