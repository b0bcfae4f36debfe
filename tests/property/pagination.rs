//! Property tests for pagination arithmetic

use frametrack::query::paginate;
use frametrack::{Frame, FrameId, Status};
use proptest::prelude::*;

fn numbered(count: usize) -> Vec<Frame> {
    (0..count)
        .map(|i| Frame::new(FrameId::new(i as u64), format!("F{}", i), Status::OutHouse))
        .collect()
}

proptest! {
    #[test]
    fn prop_page_never_exceeds_size(count in 0usize..80, size in 1usize..15, page in 0usize..20) {
        let frames = numbered(count);
        let result = paginate(&frames, size, page);
        prop_assert!(result.items.len() <= size);
        prop_assert!(result.page >= 1 && result.page <= result.total_pages);
        prop_assert_eq!(result.total_pages, std::cmp::max(1, count.div_ceil(size)));
    }

    #[test]
    fn prop_page_is_expected_slice(count in 1usize..80, size in 1usize..15, page in 0usize..20) {
        let frames = numbered(count);
        let result = paginate(&frames, size, page);
        let start = (result.page - 1) * size;
        let end = std::cmp::min(result.page * size, count);
        prop_assert_eq!(&result.items[..], &frames[start..end]);
    }

    #[test]
    fn prop_pages_cover_every_item_once(count in 0usize..60, size in 1usize..10) {
        let frames = numbered(count);
        let total = paginate(&frames, size, 1).total_pages;
        let mut seen = Vec::new();
        for p in 1..=total {
            seen.extend(paginate(&frames, size, p).items);
        }
        prop_assert_eq!(seen, frames);
    }
}
