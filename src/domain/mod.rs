//! Core domain types for artgrid

mod artwork;
mod notification;
mod page;
mod selection_set;

pub use artwork::{Artwork, ArtworkId};
pub use notification::{Notification, Severity};
pub use page::{Page, Pagination, page_count};
pub use selection_set::SelectionSet;
