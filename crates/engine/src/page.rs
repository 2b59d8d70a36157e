//! Fixed-size pagination over the filtered, sorted list. Pages are 1-indexed.

pub const PAGE_SIZE: usize = 10;

/// ceil(count / PAGE_SIZE); an empty list has 0 pages.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Clamp a requested page into [1, total_pages], treating an empty list as a
/// single empty page.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The slice visible on a (1-indexed, already clamped) page.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = (page.max(1) - 1) * PAGE_SIZE;
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}
