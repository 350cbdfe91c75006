// src/services/movie_api.rs
//
// Port between the controller and whatever answers movie queries.
// Infrastructure implements it for the real service; tests swap in fakes.

use async_trait::async_trait;

use crate::domain::{MovieDetail, SearchResultPage};
use crate::error::AppResult;

/// First page of results; the controller never asks for another
pub const FIRST_PAGE: u32 = 1;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieApi: Send + Sync {
    /// Search movies by title, one page at a time (pages start at 1)
    async fn search(&self, query: &str, page: u32) -> AppResult<SearchResultPage>;

    /// Fetch the full record of a single movie, long plot included
    async fn fetch_by_id(&self, identifier: &str) -> AppResult<MovieDetail>;
}
