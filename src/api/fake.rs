//! In-memory page source for unit tests.

use std::cell::RefCell;

use super::{FetchError, PageSource};
use crate::{Artwork, Page};

/// Serves a fixed list of artworks and records which pages were requested
pub(crate) struct FakeSource {
    pub records: Vec<Artwork>,
    /// Page number that fails with a 503 instead of returning data
    pub fail_on: Option<u32>,
    pub requested: RefCell<Vec<u32>>,
}

impl FakeSource {
    /// Dataset with ids `1..=count`
    pub fn with_ids(count: u64) -> Self {
        Self::from_records((1..=count).map(|id| Artwork::new(id, format!("Artwork {id}"))))
    }

    pub fn from_records(records: impl IntoIterator<Item = Artwork>) -> Self {
        Self {
            records: records.into_iter().collect(),
            fail_on: None,
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.fail_on = Some(page);
        self
    }

    pub fn total(&self) -> u64 {
        self.records.len() as u64
    }

    pub fn requested(&self) -> Vec<u32> {
        self.requested.borrow().clone()
    }
}

impl PageSource for FakeSource {
    fn fetch_page(&self, page: u32, limit: u32) -> Result<Page, FetchError> {
        self.requested.borrow_mut().push(page);
        if self.fail_on == Some(page) {
            return Err(FetchError::Status {
                code: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        let start = (page.saturating_sub(1) as usize) * limit as usize;
        let records = self
            .records
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(Page {
            number: page,
            size: limit,
            total_records: self.total(),
            records,
        })
    }
}
