//! Settings configuration types

use serde::{Deserialize, Serialize};

use crate::api::{DEFAULT_BASE_URL, DEFAULT_FIELDS};

/// Artworks API connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// API root; `/artworks` is appended for listing requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Comma-separated field list sent as the `fields` query parameter
    #[serde(default = "default_fields")]
    pub fields: String,

    /// Seconds to wait for a connection
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Seconds to wait for a response body
    #[serde(default = "default_read_timeout_secs")]
    pub read_timeout_secs: u64,

    /// User-Agent header sent with every request.
    /// The API asks clients to identify themselves.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Table display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSettings {
    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Longer cell text is cut off with an ellipsis
    #[serde(default = "default_max_cell_width")]
    pub max_cell_width: usize,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_fields() -> String {
    DEFAULT_FIELDS.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_read_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("artgrid/{}", env!("CARGO_PKG_VERSION"))
}

fn default_page_size() -> u32 {
    12
}

fn default_max_cell_width() -> usize {
    40
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fields: default_fields(),
            connect_timeout_secs: default_connect_timeout_secs(),
            read_timeout_secs: default_read_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            max_cell_width: default_max_cell_width(),
        }
    }
}
