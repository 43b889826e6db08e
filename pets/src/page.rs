//! Result pages and page-count math.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use serde::{Deserialize, Serialize};

use crate::query::PAGE_SIZE;
use crate::record::PetRecord;

/// One page of listing results plus the exact number of matching rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PetPage {
    pub pets: Vec<PetRecord>,
    pub count: u64,
}

impl PetPage {
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        total_pages(self.count)
    }
}

/// `ceil(count / PAGE_SIZE)`, never less than one so an empty result still
/// has a first page.
#[must_use]
pub fn total_pages(count: u64) -> u32 {
    let pages = count.div_ceil(u64::from(PAGE_SIZE)).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Extract the total from a `Content-Range` header such as `0-19/57` or
/// `*/0`. Returns `None` when the total is unknown (`0-19/*`) or the header
/// is malformed.
#[must_use]
pub fn parse_content_range(header: &str) -> Option<u64> {
    let (range, total) = header.trim().split_once('/')?;
    if range.is_empty() {
        return None;
    }
    total.parse().ok()
}
