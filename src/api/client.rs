//! Blocking HTTP client for the artworks API.

use std::time::Duration;

use tracing::{debug, warn};

use super::{ArtworksResponse, FetchError, PageSource};
use crate::Page;
use crate::config::ApiSettings;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Fields requested for each artwork
pub const DEFAULT_FIELDS: &str =
    "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

/// Turn an error response body into a short message.
///
/// The API answers errors with `{"status": 403, "error": "...", "detail": "..."}`;
/// anything else is passed through as text.
pub(super) fn error_message(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "no response body".to_string();
    }

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };

    let error = value.get("error").and_then(|v| v.as_str());
    let detail = value
        .get("detail")
        .or_else(|| value.get("message"))
        .and_then(|v| v.as_str());

    match (error, detail) {
        (Some(error), Some(detail)) => format!("{error}: {detail}"),
        (Some(msg), None) | (None, Some(msg)) => msg.to_string(),
        (None, None) => body.to_string(),
    }
}

/// Client for `GET {base_url}/artworks`
#[derive(Clone)]
pub struct ArtworkClient {
    base_url: String,
    fields: String,
    agent: ureq::Agent,
}

impl ArtworkClient {
    /// Create a client against the public API with default settings
    pub fn new() -> Self {
        Self::from_settings(&ApiSettings::default())
    }

    /// Create a client against a custom API root (e.g. a local fixture server)
    pub fn with_url(base_url: impl Into<String>) -> Self {
        let settings = ApiSettings {
            base_url: base_url.into(),
            ..ApiSettings::default()
        };
        Self::from_settings(&settings)
    }

    pub fn from_settings(settings: &ApiSettings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(settings.connect_timeout_secs))
            .timeout_read(Duration::from_secs(settings.read_timeout_secs))
            .user_agent(&settings.user_agent)
            .build();

        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            fields: settings.fields.clone(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn artworks_url(&self) -> String {
        format!("{}/artworks", self.base_url)
    }
}

impl Default for ArtworkClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for ArtworkClient {
    fn fetch_page(&self, page: u32, limit: u32) -> Result<Page, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidPage { page });
        }

        let url = self.artworks_url();
        debug!(url = %url, page, limit, "Fetching artworks page");

        let response = self
            .agent
            .get(&url)
            .query("page", &page.to_string())
            .query("limit", &limit.to_string())
            .query("fields", &self.fields)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, resp) => {
                    let body = resp.into_string().unwrap_or_default();
                    FetchError::Status {
                        code,
                        message: error_message(&body),
                    }
                }
                ureq::Error::Transport(transport) => FetchError::Transport(transport.to_string()),
            })
            .inspect_err(|e| warn!(page, "Artworks request failed: {}", e))?;

        let body = response
            .into_string()
            .map_err(|e| FetchError::Transport(format!("failed to read response body: {e}")))?;

        let parsed: ArtworksResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(page, "Artworks response did not parse: {}", e);
            FetchError::Parse(e.to_string())
        })?;

        debug!(
            page,
            records = parsed.data.len(),
            total = parsed.pagination.total,
            "Fetched artworks page"
        );
        Ok(parsed.into_page(page, limit))
    }
}
