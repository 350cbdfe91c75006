use serde::{Deserialize, Serialize};

/// Sentinel the movie service uses for "field not available"
pub const ABSENT_MARKER: &str = "N/A";

/// Image shown whenever a record carries no usable poster
pub const PLACEHOLDER_POSTER_URL: &str =
    "https://via.placeholder.com/300x450?text=No+Poster+Available";

/// Poster reference of a movie record
///
/// The service reports a missing poster either by omitting the field or by
/// sending the absent-marker; both collapse to `Missing` so the marker never
/// reaches a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Poster {
    Available(String),
    Missing,
}

impl Poster {
    /// URL of the poster, if the service provided one
    pub fn url(&self) -> Option<&str> {
        match self {
            Poster::Available(url) => Some(url.as_str()),
            Poster::Missing => None,
        }
    }

    /// URL to render: the poster itself or the fixed placeholder
    pub fn display_url(&self) -> &str {
        self.url().unwrap_or(PLACEHOLDER_POSTER_URL)
    }
}

impl From<Option<String>> for Poster {
    fn from(raw: Option<String>) -> Self {
        match raw {
            Some(url) if !url.trim().is_empty() && url.trim() != ABSENT_MARKER => {
                Poster::Available(url)
            }
            _ => Poster::Missing,
        }
    }
}

impl From<Poster> for Option<String> {
    fn from(poster: Poster) -> Self {
        match poster {
            Poster::Available(url) => Some(url),
            Poster::Missing => None,
        }
    }
}

/// Minimal movie data shown in the result grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultSummary {
    /// Service identifier (IMDb id), unique and non-empty
    pub identifier: String,
    pub title: String,
    pub year: String,
    pub poster: Poster,
}

/// Full movie data shown in the detail overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub identifier: String,
    pub title: String,
    pub year: String,
    pub rated: String,
    pub runtime: String,
    /// Genres in the order the service lists them
    pub genres: Vec<String>,
    pub imdb_rating: String,
    pub plot: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub poster: Poster,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultPage {
    pub results: Vec<SearchResultSummary>,
    /// Total number of matches across all pages
    pub total_results: u64,
}

impl SearchResultPage {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            total_results: 0,
        }
    }
}

/// Split the service's comma-separated genre field into ordered tags
pub fn split_genres(raw: &str) -> Vec<String> {
    if raw.trim() == ABSENT_MARKER {
        return Vec::new();
    }

    raw.split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}
