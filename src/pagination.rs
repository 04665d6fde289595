//! Page slicing for the sorted article list.
//!
//! The active page is never clamped: a page past the end is simply empty.
//! Whoever owns the page state resets it to 1 when the result set changes.

use crate::error::MatrixError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    #[default]
    Thirty,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Thirty, PageSize::Fifty, PageSize::Hundred];

    pub fn get(self) -> usize {
        match self {
            PageSize::Thirty => 30,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = MatrixError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            30 => Ok(PageSize::Thirty),
            50 => Ok(PageSize::Fifty),
            100 => Ok(PageSize::Hundred),
            other => Err(MatrixError::InvalidPageSize(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    active_page: usize,
    pub page_size: PageSize,
}

impl PageState {
    /// Page numbers are 1-based; 0 is treated as 1.
    pub fn new(active_page: usize, page_size: PageSize) -> Self {
        Self {
            active_page: active_page.max(1),
            page_size,
        }
    }

    pub fn active_page(&self) -> usize {
        self.active_page
    }

    pub fn set_active_page(&mut self, page: usize) {
        self.active_page = page.max(1);
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(1, PageSize::default())
    }
}

/// One page of results plus the bounds needed to describe it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 0-based index of the first item; may be past the end.
    pub start_index: usize,
    /// Exclusive end index, never past the end.
    pub end_index: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn showing(&self) -> Showing {
        Showing {
            first: if self.is_empty() { 0 } else { self.start_index + 1 },
            last: if self.is_empty() { 0 } else { self.end_index },
            total: self.total_items,
        }
    }
}

/// "Showing 31-60 of 95" style range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Showing {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl fmt::Display for Showing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} of {}", self.first, self.last, self.total)
    }
}

/// Number of pages needed for `total_items`, never less than 1.
pub fn total_pages(total_items: usize, page_size: PageSize) -> usize {
    total_items.div_ceil(page_size.get()).max(1)
}

/// Slice `sorted` down to the active page.
pub fn paginate<T: Clone>(sorted: &[T], page: &PageState) -> Page<T> {
    let size = page.page_size.get();
    let total_items = sorted.len();
    let start_index = (page.active_page - 1).saturating_mul(size);
    let end_index = start_index.saturating_add(size).min(total_items);

    let items = if start_index >= total_items {
        Vec::new()
    } else {
        sorted[start_index..end_index].to_vec()
    };

    Page {
        items,
        start_index,
        end_index,
        total_pages: total_pages(total_items, page.page_size),
        total_items,
    }
}
