// web_app/paging.rs - Fixed-size page slicing
//
// The paginator never touches the filtered view itself; it only derives
// the visible slice for a 1-indexed page number.

/// Number of table rows per page.
pub const PAGE_SIZE: usize = 5;

/// Total number of pages needed for `total` items.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// The 1-indexed page `page` of `items`.
///
/// Page `k` yields the slice `[(k-1)*size, min(k*size, len))`. Pages past
/// the end (and page 0) yield an empty slice; there is no wraparound and
/// no clamping to the last page.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let Some(start) = page.checked_sub(1).map(|p| p * page_size) else {
        return Vec::new();
    };
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}
