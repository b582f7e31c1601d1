//! Configuration loading and management

mod io;
mod settings;


pub use settings::{ApiSettings, TableSettings};

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Artworks API connection settings
    #[serde(default)]
    pub api: ApiSettings,

    /// Table display settings
    #[serde(default)]
    pub table: TableSettings,
}
