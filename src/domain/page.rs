use serde::{Deserialize, Serialize};

use super::Artwork;

/// Number of pages needed to hold `total` records at `size` records per page
pub fn page_count(total: u64, size: u32) -> u32 {
    if size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Pagination block of an API response
///
/// The API sends more keys than these (`offset`, `next_url`, ...). Only
/// `total` is relied upon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,

    #[serde(default)]
    pub limit: u32,

    #[serde(default)]
    pub current_page: u32,

    #[serde(default)]
    pub total_pages: u32,
}

/// One fetched batch of artworks plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number
    pub number: u32,
    /// Requested page size
    pub size: u32,
    /// Total records across the whole dataset, as reported with this page
    pub total_records: u64,
    pub records: Vec<Artwork>,
}

impl Page {
    pub fn total_pages(&self) -> u32 {
        page_count(self.total_records, self.size)
    }

    pub fn is_last(&self) -> bool {
        self.number >= self.total_pages()
    }

    /// Offset of this page's first row in the whole dataset
    pub fn first_row(&self) -> u64 {
        u64::from(self.number.saturating_sub(1)) * u64::from(self.size)
    }
}
