//! Wire types for the artworks listing endpoint.

use serde::{Deserialize, Serialize};

use crate::{Artwork, Page, Pagination};

/// Body of `GET /artworks`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtworksResponse {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

impl ArtworksResponse {
    /// Convert into a [`Page`] for the page number and size that were requested
    pub fn into_page(self, number: u32, size: u32) -> Page {
        Page {
            number,
            size,
            total_records: self.pagination.total,
            records: self.data,
        }
    }
}
