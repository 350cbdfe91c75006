// src/services/search_controller.rs
//
// Search / detail data-flow controller
//
// ARCHITECTURE:
// - Owns SearchState; nothing else mutates it
// - Consumes three UI events: submit_query, select_item, close_detail
// - Each request is a fire-and-forget task; its settlement is applied as one
//   state update and announced on the event bus
//
// RULES:
// - No cancellation and no request ordering: whichever request settles last
//   determines the state it touches
// - Every settlement, success or failure, leaves is_loading == false

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use tokio::task::JoinHandle;

use crate::application::{SearchState, ViewModel};
use crate::events::{DetailClosed, DetailRequested, DetailSettled, EventBus, SearchSettled, SearchStarted};
use crate::services::movie_api::{MovieApi, FIRST_PAGE};

pub struct SearchController {
    api: Arc<dyn MovieApi>,
    state: Arc<RwLock<SearchState>>,
    event_bus: Arc<EventBus>,
}

impl SearchController {
    pub fn new(api: Arc<dyn MovieApi>, event_bus: Arc<EventBus>) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(SearchState::new())),
            event_bus,
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SearchState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// What the screen should show right now
    pub fn view(&self) -> ViewModel {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        ViewModel::from_state(&state)
    }

    /// Start a search for `text`.
    ///
    /// Blank input is ignored and returns `None`. Must be called inside a
    /// tokio runtime; the returned handle completes once the outcome is applied.
    pub fn submit_query(&self, text: &str) -> Option<JoinHandle<()>> {
        let query = text.trim();
        if query.is_empty() {
            log::debug!("Ignoring blank search submission");
            return None;
        }
        let query = query.to_string();

        write_state(&self.state).begin_search(query.clone());
        self.event_bus.emit(SearchStarted::new(query.clone()));

        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        let event_bus = Arc::clone(&self.event_bus);

        Some(tokio::spawn(async move {
            log::debug!("Searching for {:?}", query);
            let outcome = api.search(&query, FIRST_PAGE).await;
            let error = outcome.as_ref().err().map(ToString::to_string);

            let settled = {
                let mut state = write_state(&state);
                state.settle_search(outcome);
                SearchSettled::new(
                    query,
                    state.result_list.len(),
                    state.total_result_count,
                    error,
                )
            };

            match &settled.error {
                None => log::info!(
                    "Search {:?} settled: {} shown, {} total",
                    settled.query,
                    settled.result_count,
                    settled.total_results
                ),
                Some(e) => log::info!("Search {:?} failed: {}", settled.query, e),
            }
            event_bus.emit(settled);
        }))
    }

    /// Fetch and show the full record of `identifier`.
    ///
    /// A blank identifier is ignored and returns `None`.
    pub fn select_item(&self, identifier: &str) -> Option<JoinHandle<()>> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            log::warn!("Ignoring selection without identifier");
            return None;
        }
        let identifier = identifier.to_string();

        write_state(&self.state).begin_detail();
        self.event_bus.emit(DetailRequested::new(identifier.clone()));

        let api = Arc::clone(&self.api);
        let state = Arc::clone(&self.state);
        let event_bus = Arc::clone(&self.event_bus);

        Some(tokio::spawn(async move {
            log::debug!("Fetching details for {}", identifier);
            let outcome = api.fetch_by_id(&identifier).await;
            let error = outcome.as_ref().err().map(ToString::to_string);

            write_state(&state).settle_detail(outcome);

            match &error {
                None => log::info!("Details for {} settled", identifier),
                Some(e) => log::info!("Details for {} failed: {}", identifier, e),
            }
            event_bus.emit(DetailSettled::new(identifier, error));
        }))
    }

    /// Dismiss the overlay. No network effect.
    pub fn close_detail(&self) {
        write_state(&self.state).close_detail();
        self.event_bus.emit(DetailClosed::new());
    }
}

fn write_state(state: &RwLock<SearchState>) -> RwLockWriteGuard<'_, SearchState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}
