//! Multi-page selection accumulator.
//!
//! Walks the dataset front to back, one page at a time, adding artworks that
//! are not yet selected until the requested number has been added or there
//! are no pages left.


use tracing::{debug, info, warn};

use crate::api::{FetchError, PageSource};
use crate::{SelectionSet, page_count};

/// Result of one accumulation run
#[derive(Debug, Clone)]
pub struct Accumulation {
    /// The input selection plus everything added during this run
    pub selection: SelectionSet,
    /// How many artworks were asked for
    pub requested: usize,
    /// How many artworks were actually added
    pub added: usize,
    /// Page numbers fetched, in request order
    pub pages_fetched: Vec<u32>,
    /// The fetch failure that stopped the run early, if any
    pub error: Option<FetchError>,
}

impl Accumulation {
    /// True when the run finished without error and added everything requested
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.added == self.requested
    }

    /// Requested artworks that could not be added
    pub fn shortfall(&self) -> usize {
        self.requested - self.added
    }
}

/// Add up to `target_count` unselected artworks to a copy of `already_selected`.
///
/// Pages `1..=ceil(total_records / page_size)` are fetched in order, each at
/// most once, and each is fully scanned before the next is requested. Scanning
/// stops as soon as the target is met. If a fetch fails, the run stops there
/// and whatever was added from earlier pages is kept in the returned selection.
pub fn accumulate<S: PageSource + ?Sized>(
    source: &S,
    target_count: usize,
    page_size: u32,
    total_records: u64,
    already_selected: &SelectionSet,
) -> Accumulation {
    let mut selection = already_selected.clone();
    let mut remaining = target_count;
    let mut pages_fetched = Vec::new();
    let mut error = None;

    let last_page = page_count(total_records, page_size);
    let mut current_page = 1;

    debug!(
        target_count,
        page_size, total_records, last_page, "Starting selection accumulation"
    );

    while remaining > 0 && current_page <= last_page {
        pages_fetched.push(current_page);
        let page = match source.fetch_page(current_page, page_size) {
            Ok(page) => page,
            Err(e) => {
                warn!(page = current_page, "Accumulation stopped: {}", e);
                error = Some(e);
                break;
            }
        };

        for artwork in page.records {
            if remaining == 0 {
                break;
            }
            if selection.insert(artwork) {
                remaining -= 1;
            }
        }

        current_page += 1;
    }

    let added = target_count - remaining;
    info!(
        added,
        requested = target_count,
        pages = pages_fetched.len(),
        "Selection accumulation finished"
    );

    Accumulation {
        selection,
        requested: target_count,
        added,
        pages_fetched,
        error,
    }
}

/// Upper bound for a "select N" request given the current selection size
pub fn max_selectable(total_records: u64, selected: usize) -> usize {
    let total = usize::try_from(total_records).unwrap_or(usize::MAX);
    total.saturating_sub(selected)
}

/// Clamp a requested count into `1..=max_selectable`.
///
/// Returns `None` when nothing more can be selected. This bound is input
/// validation only; the accumulator itself does not rely on it.
pub fn clamp_request(requested: usize, total_records: u64, selected: usize) -> Option<usize> {
    let max = max_selectable(total_records, selected);
    if max == 0 {
        return None;
    }
    Some(requested.clamp(1, max))
}
