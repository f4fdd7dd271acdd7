//! # Pagination
//!
//! Slices a filtered result into fixed-size pages and computes the control
//! strip shown above and below the results.
//!
//! ## Control Layout
//!
//! At most [`MAX_VISIBLE_PAGES`] numbered buttons are shown, starting two
//! pages before the current one:
//!
//! ```text
//! current = 6, total = 20:   ‹ 1 … 4 5 [6] 7 8 … 20 ›
//! current = 1, total = 20:   ‹ [1] 2 3 4 5 … 20 ›
//! current = 19, total = 20:  ‹ 1 … 17 18 [19] 20 ›
//! ```
//!
//! The window is not shifted back near the end, so it can shrink below five
//! buttons there. A single page of results gets no controls at all.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const MAX_VISIBLE_PAGES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub current_page: usize,
}

/// 1-based positions of the first and last item on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamp a requested page into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Returns the items of `page` (1-based). Out-of-range pages are empty.
pub fn paginate<T: Clone>(filtered: &[T], page: usize, page_size: usize) -> Page<T> {
    let total = total_pages(filtered.len(), page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = if page == 0 || start >= filtered.len() {
        Vec::new()
    } else {
        let end = (start + page_size).min(filtered.len());
        filtered[start..end].to_vec()
    };

    Page {
        items,
        total_pages: total,
        current_page: page,
    }
}

pub fn page_range(count: usize, page: usize, page_size: usize) -> Option<PageRange> {
    if count == 0 || page == 0 {
        return None;
    }
    let start = (page - 1) * page_size + 1;
    if start > count {
        return None;
    }
    Some(PageRange {
        start,
        end: (start + page_size - 1).min(count),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Page { number: usize, active: bool },
    Ellipsis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavButton {
    /// Page the button navigates to. Meaningless when disabled.
    pub target: usize,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationControls {
    pub previous: NavButton,
    pub links: Vec<PageLink>,
    pub next: NavButton,
}

pub fn pagination_controls(current: usize, total: usize) -> Option<PaginationControls> {
    if total <= 1 {
        return None;
    }
    let current = clamp_page(current, total);
    let start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total);

    let mut links = Vec::new();
    if start > 1 {
        links.push(PageLink::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    for number in start..=end {
        links.push(PageLink::Page {
            number,
            active: number == current,
        });
    }
    if end < total {
        if end < total - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page {
            number: total,
            active: false,
        });
    }

    Some(PaginationControls {
        previous: NavButton {
            target: current - 1,
            disabled: current == 1,
        },
        links,
        next: NavButton {
            target: current + 1,
            disabled: current == total,
        },
    })
}
