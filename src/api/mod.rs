//! Access to the paginated artworks listing.
//!
//! [`PageSource`] is the seam between the selection logic and the network:
//! the HTTP client implements it, and tests substitute in-memory fakes.

mod client;
mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use client::{ArtworkClient, DEFAULT_BASE_URL, DEFAULT_FIELDS};
pub use types::ArtworksResponse;

use crate::Page;

/// Why a page could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Could not reach the artworks API: {0}")]
    Transport(String),

    #[error("Artworks API returned HTTP {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Unexpected response from the artworks API: {0}")]
    Parse(String),

    #[error("Invalid page number {page} (pages start at 1)")]
    InvalidPage { page: u32 },
}

/// Something that can produce one page of artworks at a time
///
/// Implementations return the records of page `page` (1-based) at `limit`
/// records per page, in the dataset's natural order, together with the total
/// number of records in the dataset.
pub trait PageSource {
    fn fetch_page(&self, page: u32, limit: u32) -> Result<Page, FetchError>;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch_page(&self, page: u32, limit: u32) -> Result<Page, FetchError> {
        (**self).fetch_page(page, limit)
    }
}
