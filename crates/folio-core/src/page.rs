//! Page-window math shared by every listing operation.

use serde::{Deserialize, Serialize};

/// Pagination metadata over an ordered result set.
///
/// `total` is the total page count, not the total item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current: u64,
    pub total: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Compute the window for a 1-based `page` of size `limit` over
    /// `total_items` entries.
    pub fn new(page: u64, limit: u64, total_items: u64) -> Self {
        let total = total_items.div_ceil(limit.max(1));
        Self {
            current: page,
            total,
            has_next: page < total,
            has_prev: page > 1,
        }
    }
}

/// One page of items plus its window metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}
