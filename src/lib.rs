//! artgrid - browse the Art Institute of Chicago collection as a table
//!
//! artgrid pages through the public artworks API, shows one page at a time,
//! and keeps a row selection for the session.
//!
//! ## Bulk selection
//!
//! Besides toggling rows one by one, a "select N" request walks the dataset
//! from the first page onward and adds the first N artworks that are not
//! selected yet (see [`selection::accumulate`]). Pages are fetched one at a
//! time and in order, so the fill order always matches the dataset order.

pub mod api;
pub mod config;
pub mod domain;
pub mod selection;
pub mod table;

pub use domain::*;
