use std::ops::Range;

/// Where the current page sits within the filtered result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub range: Range<usize>,
}

impl PageWindow {
    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

/// Never less than one, so an empty result still reports "page 1 of 1".
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Pulls `page` down to `total_pages` and up to 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages).max(1)
}

pub fn paginate(len: usize, page_size: usize, current_page: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let total_pages = total_pages(len, page_size);
    let current_page = clamp_page(current_page, total_pages);
    let start = ((current_page - 1) * page_size).min(len);
    let end = (start + page_size).min(len);

    PageWindow {
        current_page,
        total_pages,
        has_prev: current_page > 1,
        has_next: current_page < total_pages,
        range: start..end,
    }
}

#[cfg(test)]
#[path = "tests/pagination_tests.rs"]
mod tests;
