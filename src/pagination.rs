//! Fixed-size pagination with silent normalization.
//!
//! Malformed page input never surfaces an error: a non-integer value lands
//! on page 1, an out-of-range integer (including 0 and negatives) lands on
//! the last page. An empty collection still has one (empty) page.

/// One page of a larger collection, with the metadata the list view needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number after normalization
    pub number: usize,
    /// Total number of pages (always >= 1)
    pub num_pages: usize,
    /// Index range [start, end) into the full collection
    pub start: usize,
    pub end: usize,
}

impl Page {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }
}

/// Splits a collection into fixed-size pages.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    per_page: usize,
}

impl Paginator {
    pub fn new(per_page: usize) -> Self {
        debug_assert!(per_page > 0);
        Self { per_page }
    }

    pub fn num_pages(&self, total: usize) -> usize {
        if total == 0 {
            1
        } else {
            total.div_ceil(self.per_page)
        }
    }

    /// Normalize a raw `page` query value to a valid page number.
    ///
    /// Missing or non-integer input coerces to 1; integers outside
    /// `1..=num_pages` coerce to the last page.
    pub fn resolve(&self, raw: Option<&str>, total: usize) -> usize {
        let num_pages = self.num_pages(total);
        match raw.unwrap_or("1").trim().parse::<i64>() {
            Err(_) => 1,
            Ok(n) if n < 1 || n as usize > num_pages => num_pages,
            Ok(n) => n as usize,
        }
    }

    /// Slice bounds and metadata for the given 1-based page number.
    ///
    /// `number` must already be normalized via [`Paginator::resolve`].
    pub fn page(&self, total: usize, number: usize) -> Page {
        let num_pages = self.num_pages(total);
        let number = number.clamp(1, num_pages);
        let start = (number - 1) * self.per_page;
        let end = (start + self.per_page).min(total);
        Page {
            number,
            num_pages,
            start,
            end,
        }
    }
}
