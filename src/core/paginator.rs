use serde::Serialize;

/// One page cut out of a larger sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// `ceil(len / page_size)`, never less than 1 so "page 1 of 1" always exists.
/// A zero page size yields a single (empty) page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Bring `page` back into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice `[(page-1)*size, page*size)` out of `items`.
///
/// Page 0 and pages past the end produce an empty slice instead of an error.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageSlice<T> {
    let total = total_pages(items.len(), page_size);

    let slice = if page == 0 || page_size == 0 {
        &items[..0]
    } else {
        let start = (page - 1).saturating_mul(page_size).min(items.len());
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    };

    PageSlice {
        items: slice.to_vec(),
        page,
        page_size,
        total_pages: total,
    }
}
