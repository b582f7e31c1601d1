use serde::{Deserialize, Serialize};

/// Identifier of an artwork, unique within the remote dataset
pub type ArtworkId = u64;

/// One catalog entry as returned by the artworks API
///
/// Only `id` is guaranteed by the API. Every descriptive field may come back
/// as `null` (or be missing when the field list is narrowed), so they are all
/// optional here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: ArtworkId,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    #[serde(default)]
    pub place_of_origin: Option<String>,

    /// Attribution text, often multi-line ("Artist\nNationality, dates")
    #[serde(default)]
    pub artist_display: Option<String>,

    #[serde(default)]
    pub inscriptions: Option<String>,

    #[serde(default)]
    pub date_start: Option<i64>,

    #[serde(default)]
    pub date_end: Option<i64>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Artwork {
    /// Create an artwork with only an id and title set
    pub fn new(id: ArtworkId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }

    /// Human-readable date range, e.g. "1884–1886" or "1890"
    pub fn display_date_range(&self) -> String {
        match (self.date_start, self.date_end) {
            (Some(start), Some(end)) if start == end => start.to_string(),
            (Some(start), Some(end)) => format!("{}–{}", start, end),
            (Some(year), None) | (None, Some(year)) => year.to_string(),
            (None, None) => String::new(),
        }
    }

    /// First line of the attribution, which is usually just the artist name
    pub fn artist_name(&self) -> Option<&str> {
        self.artist_display
            .as_deref()
            .and_then(|s| s.lines().next())
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
