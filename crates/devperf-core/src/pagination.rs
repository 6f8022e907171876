//! Paginator for the filtered device table
//!
//! Pages are 1-based. [`paginate`] does not clamp: callers keep the current
//! page inside `[1, max(1, total_pages)]` with [`clamp_page`].

/// Fixed number of rows per table page
pub const PAGE_SIZE: usize = 10;

/// Slice `items` to the given 1-based page
///
/// Returns the visible slice and the total page count. A page past the end
/// (or page 0) yields an empty slice. A zero page size yields no pages.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], usize) {
    if page_size == 0 {
        return (&[], 0);
    }

    let total_pages = total_pages(items.len(), page_size);
    if page == 0 || page > total_pages {
        return (&[], total_pages);
    }

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    (&items[start..end], total_pages)
}

/// `ceil(total_items / page_size)`, or 0 for a zero page size
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Clamp `page` into `[1, max(1, total_pages)]`
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// 1-based inclusive range of items shown on `page`
///
/// Drives the "showing x – y of z" footer. Returns `(0, 0)` when there are
/// no items.
pub fn item_range(total_items: usize, page: usize, page_size: usize) -> (usize, usize) {
    if total_items == 0 || page == 0 {
        return (0, 0);
    }
    let first = (page - 1) * page_size + 1;
    let last = (page * page_size).min(total_items);
    (first, last)
}
