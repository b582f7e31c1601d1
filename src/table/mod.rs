//! Table view state: the current page, pagination position, row selection,
//! and pending notifications.
//!
//! All network access goes through a [`PageSource`] passed into each
//! operation, so the state itself holds no connection and can be driven by
//! any front end.

mod render;

#[cfg(test)]
mod tests;

pub use render::{render_page, render_selection};

use tracing::debug;

use crate::api::PageSource;
use crate::selection::{self, Accumulation};
use crate::{Artwork, ArtworkId, Notification, SelectionSet, page_count};

/// Default rows per page
pub const DEFAULT_ROWS: u32 = 12;

/// State of the artworks table
#[derive(Debug, Clone)]
pub struct TableState {
    /// Rows per page
    rows: u32,

    /// Offset of the first row on the current page
    first: u64,

    /// 1-based number of the page currently shown
    current_page: u32,

    /// Total records as last reported by the API
    total_records: u64,

    /// Artworks on the current page
    artworks: Vec<Artwork>,

    selection: SelectionSet,

    /// True while a fetch is in flight. Fetches are blocking, so this is only
    /// observable by a front end that runs them off its own event loop.
    loading: bool,

    /// Notifications not yet shown to the user
    notifications: Vec<Notification>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS)
    }
}

impl TableState {
    pub fn new(rows: u32) -> Self {
        Self {
            rows: rows.max(1),
            first: 0,
            current_page: 1,
            total_records: 0,
            artworks: Vec::new(),
            selection: SelectionSet::new(),
            loading: false,
            notifications: Vec::new(),
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn first(&self) -> u64 {
        self.first
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn total_pages(&self) -> u32 {
        page_count(self.total_records, self.rows)
    }

    pub fn artworks(&self) -> &[Artwork] {
        &self.artworks
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Dismiss and return all pending notifications
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// How many more artworks a "select N" request may ask for
    pub fn max_selectable(&self) -> usize {
        selection::max_selectable(self.total_records, self.selection.len())
    }

    /// Fetch and show page `page`.
    ///
    /// On failure the previous rows stay on screen and an error notification
    /// is queued. Returns whether the page was loaded.
    pub fn load_page<S: PageSource + ?Sized>(&mut self, source: &S, page: u32) -> bool {
        self.load(source, page, self.rows)
    }

    /// Fetch `page` at `rows` per page. Page size, offset and page number are
    /// only committed once the fetch succeeds.
    fn load<S: PageSource + ?Sized>(&mut self, source: &S, page: u32, rows: u32) -> bool {
        self.loading = true;
        let result = source.fetch_page(page, rows);
        self.loading = false;

        match result {
            Ok(fetched) => {
                debug!(
                    page,
                    rows = fetched.records.len(),
                    total = fetched.total_records,
                    "Loaded page"
                );
                self.rows = rows;
                self.first = fetched.first_row();
                self.artworks = fetched.records;
                self.total_records = fetched.total_records;
                self.current_page = page;
                true
            }
            Err(e) => {
                self.notifications
                    .push(Notification::error(format!("Failed to fetch artworks. {e}")));
                false
            }
        }
    }

    /// Paginator event: jump to the page containing row `first` at `rows` per page
    pub fn change_page<S: PageSource + ?Sized>(
        &mut self,
        source: &S,
        first: u64,
        rows: u32,
    ) -> bool {
        let rows = rows.max(1);
        let page = first / u64::from(rows) + 1;
        let page = u32::try_from(page).unwrap_or(u32::MAX);
        self.load(source, page, rows)
    }

    /// Change the page size, keeping the first visible row on screen
    pub fn set_rows<S: PageSource + ?Sized>(&mut self, source: &S, rows: u32) -> bool {
        let first = self.first;
        let rows = rows.max(1);
        self.change_page(source, first - first % u64::from(rows), rows)
    }

    pub fn next_page<S: PageSource + ?Sized>(&mut self, source: &S) -> bool {
        if self.current_page >= self.total_pages() {
            self.notifications
                .push(Notification::info("Already on the last page"));
            return false;
        }
        self.load_page(source, self.current_page + 1)
    }

    pub fn prev_page<S: PageSource + ?Sized>(&mut self, source: &S) -> bool {
        if self.current_page <= 1 {
            self.notifications
                .push(Notification::info("Already on the first page"));
            return false;
        }
        self.load_page(source, self.current_page - 1)
    }

    /// Toggle a row of the current page. Returns the new state, or `None` if
    /// no artwork with that id is on the current page.
    pub fn toggle_row(&mut self, id: ArtworkId) -> Option<bool> {
        let artwork = self.artworks.iter().find(|a| a.id == id)?;
        Some(self.selection.toggle(artwork))
    }

    /// Select every artwork on the current page. Returns how many were newly selected.
    pub fn select_all_on_page(&mut self) -> usize {
        self.artworks
            .iter()
            .filter(|a| self.selection.insert((*a).clone()))
            .count()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Select `count` more artworks, walking pages from the start of the dataset.
    ///
    /// `count` is clamped to `1..=max_selectable()`. Partial progress is kept
    /// even when a page fetch fails. Returns `None` if nothing more can be
    /// selected.
    pub fn select_multiple<S: PageSource + ?Sized>(
        &mut self,
        source: &S,
        count: usize,
    ) -> Option<Accumulation> {
        if self.total_records == 0 {
            self.notifications
                .push(Notification::info("Nothing loaded yet"));
            return None;
        }

        let Some(count) =
            selection::clamp_request(count, self.total_records, self.selection.len())
        else {
            self.notifications
                .push(Notification::info("All artworks are already selected"));
            return None;
        };

        self.loading = true;
        let result = selection::accumulate(
            source,
            count,
            self.rows,
            self.total_records,
            &self.selection,
        );
        self.loading = false;

        self.selection = result.selection.clone();

        match &result.error {
            Some(e) => self.notifications.push(Notification::error(format!(
                "Failed to select multiple rows. {e} ({} new artworks selected before the failure)",
                result.added
            ))),
            None => self.notifications.push(Notification::success(format!(
                "Selected {} new artworks",
                result.added
            ))),
        }

        Some(result)
    }
}
