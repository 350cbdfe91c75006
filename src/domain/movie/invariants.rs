use super::entity::{MovieDetail, SearchResultSummary};
use crate::domain::{DomainError, DomainResult};

/// Validates a summary record produced by a search
pub fn validate_summary(summary: &SearchResultSummary) -> DomainResult<()> {
    validate_identifier(&summary.identifier)
}

/// Validates a detail record produced by a fetch-by-id
pub fn validate_detail(detail: &MovieDetail) -> DomainResult<()> {
    validate_identifier(&detail.identifier)
}

/// Identifiers cannot be empty
pub fn validate_identifier(identifier: &str) -> DomainResult<()> {
    if identifier.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie identifier cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// A search needs a non-empty title and a page starting at 1
pub fn validate_search_request(query: &str, page: u32) -> DomainResult<()> {
    if query.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Search query cannot be empty".to_string(),
        ));
    }
    if page < 1 {
        return Err(DomainError::InvariantViolation(format!(
            "Page must be at least 1, got {}",
            page
        )));
    }
    Ok(())
}
