// src/domain/mod.rs
//
// Domain Root - movie records as the rest of the crate sees them.
//
// All other modules import from `crate::domain::*`

pub mod movie;

pub use movie::{
    split_genres, validate_detail, validate_identifier, validate_search_request,
    validate_summary, MovieDetail, Poster, SearchResultPage, SearchResultSummary, ABSENT_MARKER,
    PLACEHOLDER_POSTER_URL,
};

use thiserror::Error;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
