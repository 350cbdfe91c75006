// src/lib.rs
// Movie Explorer - search the OMDb movie database from the terminal
//
// Architecture:
// - Domain: movie records and the missing-poster policy
// - Integrations: the OMDb HTTP client, behind the MovieApi port
// - Services: the search/detail controller that owns all mutable state
// - Events: the controller announces every state change on a synchronous bus
// - Application: controller state and the pure state -> view policy
// - UI: text renderers and prompt parsing, read-only consumers of the view

pub mod application;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod integrations;
pub mod services;
pub mod ui;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    DomainError, MovieDetail, Poster, SearchResultPage, SearchResultSummary,
    PLACEHOLDER_POSTER_URL,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    DetailClosed, DetailRequested, DetailSettled, DomainEvent, EventBus, EventLogEntry,
    SearchSettled, SearchStarted,
};

// ============================================================================
// PUBLIC API - Controller & Integrations
// ============================================================================

pub use application::{MainPanel, SearchState, ViewModel};
pub use infrastructure::OmdbConfig;
pub use integrations::OmdbClient;
pub use services::{MovieApi, SearchController};
