pub mod entity;
pub mod invariants;

pub use entity::{
    split_genres, MovieDetail, Poster, SearchResultPage, SearchResultSummary, ABSENT_MARKER,
    PLACEHOLDER_POSTER_URL,
};
pub use invariants::{
    validate_detail, validate_identifier, validate_search_request, validate_summary,
};
