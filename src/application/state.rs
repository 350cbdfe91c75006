// src/application/state.rs
//
// State owned by the search controller.
//
// RULES:
// - Mutated only through the transition methods below
// - Each settlement is applied in one call, so no update is ever half-visible
// - Flags are independent on purpose: the results banner can outlive the
//   search that produced it while a later request is loading or has failed

use serde::Serialize;

use crate::domain::{MovieDetail, SearchResultPage, SearchResultSummary};
use crate::error::AppError;

/// Prefix that tells a detail failure apart from a search failure
pub const DETAIL_ERROR_PREFIX: &str = "Error loading movie details: ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    /// Last submitted query; `None` until the first submission
    pub query_text: Option<String>,

    /// Outcome of the most recently settled search
    pub result_list: Vec<SearchResultSummary>,

    pub total_result_count: u64,

    pub is_loading: bool,

    pub error_message: Option<String>,

    /// Record of the most recently settled successful detail fetch
    pub selected_detail: Option<MovieDetail>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle/any -> Searching
    pub fn begin_search(&mut self, query: String) {
        self.query_text = Some(query);
        self.is_loading = true;
        self.error_message = None;
    }

    /// Searching -> Success | Failed
    pub fn settle_search(&mut self, outcome: Result<SearchResultPage, AppError>) {
        match outcome {
            Ok(page) => {
                self.result_list = page.results;
                self.total_result_count = page.total_results;
            }
            Err(e) => {
                self.result_list.clear();
                self.total_result_count = 0;
                self.error_message = Some(e.to_string());
            }
        }
        self.is_loading = false;
    }

    /// Closed/Shown -> FetchingDetail; any open detail stays visible meanwhile
    pub fn begin_detail(&mut self) {
        self.is_loading = true;
        self.error_message = None;
    }

    /// FetchingDetail -> Shown | Closed-with-error
    pub fn settle_detail(&mut self, outcome: Result<MovieDetail, AppError>) {
        match outcome {
            Ok(detail) => self.selected_detail = Some(detail),
            Err(e) => self.error_message = Some(format!("{}{}", DETAIL_ERROR_PREFIX, e)),
        }
        self.is_loading = false;
    }

    pub fn close_detail(&mut self) {
        self.selected_detail = None;
    }

    pub fn has_searched(&self) -> bool {
        self.query_text.is_some()
    }
}
