//! In-memory search, status filter and pagination over a snapshot.
//!
//! All functions here are pure and preserve the input order of frames.

use crate::frame::{Frame, StatusFilter};
use rapidfuzz::distance::indel;
use serde::Serialize;

/// Minimum partial-ratio score (exclusive) for a name to match a search.
pub const SEARCH_THRESHOLD: f64 = 70.0;

/// Page size used when the caller does not configure one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Best similarity (0-100) of the shorter string against the windows of the
/// longer one. Windows are every full-length slice plus the shorter slices
/// hanging off either end. Each window is scored by normalized Indel
/// similarity, `2 * LCS / (len_a + len_b)`. Containment scores 100; an empty
/// side scores 0.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.len() == b.len() {
        return aligned_ratio(&a, &b).max(aligned_ratio(&b, &a));
    }
    if a.len() < b.len() {
        aligned_ratio(&a, &b)
    } else {
        aligned_ratio(&b, &a)
    }
}

/// `needle` must not be longer than `haystack`.
fn aligned_ratio(needle: &[char], haystack: &[char]) -> f64 {
    let n = needle.len();
    let h = haystack.len();
    let prefixes = (1..n).map(|end| &haystack[..end]);
    let full = (0..=h - n).map(|start| &haystack[start..start + n]);
    let suffixes = (h - n + 1..h).map(|start| &haystack[start..]);

    let mut best = 0.0_f64;
    for window in prefixes.chain(full).chain(suffixes) {
        let score =
            indel::normalized_similarity(needle.iter().copied(), window.iter().copied()) * 100.0;
        if score > best {
            best = score;
            if best >= 100.0 {
                break;
            }
        }
    }
    best
}

/// Case-insensitive fuzzy name match. A blank query keeps everything.
pub fn search(frames: Vec<Frame>, query: &str) -> Vec<Frame> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return frames;
    }
    frames
        .into_iter()
        .filter(|frame| partial_ratio(&query, &frame.name.to_lowercase()) > SEARCH_THRESHOLD)
        .collect()
}

pub fn filter_by_status(frames: Vec<Frame>, filter: StatusFilter) -> Vec<Frame> {
    match filter {
        StatusFilter::All => frames,
        StatusFilter::Only(_) => frames
            .into_iter()
            .filter(|frame| filter.matches(frame.status))
            .collect(),
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub items: Vec<Frame>,
    /// 1-based page number after clamping.
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Number of pages needed for `count` items; never less than one.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    count.div_ceil(page_size).max(1)
}

/// Slice out page `page_number` (1-based), clamping it into the valid range.
pub fn paginate(frames: &[Frame], page_size: usize, page_number: usize) -> Page {
    let page_size = page_size.max(1);
    let total_pages = total_pages(frames.len(), page_size);
    let page = page_number.clamp(1, total_pages);
    let start = ((page - 1) * page_size).min(frames.len());
    let end = (page * page_size).min(frames.len());
    Page {
        items: frames[start..end].to_vec(),
        page,
        page_size,
        total_pages,
        total_items: frames.len(),
    }
}
