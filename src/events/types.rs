// src/events/types.rs
//
// Events emitted by the search controller.
// Each event is a fact about a state change that has already happened.
//
// RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only what a subscriber needs to react (usually: redraw)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ident) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($event)
            }
        }
    };
}

// ============================================================================
// SEARCH EVENTS
// ============================================================================

/// A search request was sent; the state is now loading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub query: String,
}

impl SearchStarted {
    pub fn new(query: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            query,
        }
    }
}

impl_domain_event!(SearchStarted);

/// A search request settled and its outcome was applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub query: String,
    pub result_count: usize,
    pub total_results: u64,
    pub error: Option<String>,
}

impl SearchSettled {
    pub fn new(
        query: String,
        result_count: usize,
        total_results: u64,
        error: Option<String>,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            query,
            result_count,
            total_results,
            error,
        }
    }
}

impl_domain_event!(SearchSettled);

// ============================================================================
// DETAIL EVENTS
// ============================================================================

/// A detail fetch was sent for one identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailRequested {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub identifier: String,
}

impl DetailRequested {
    pub fn new(identifier: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            identifier,
        }
    }
}

impl_domain_event!(DetailRequested);

/// A detail fetch settled and its outcome was applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailSettled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub identifier: String,
    pub error: Option<String>,
}

impl DetailSettled {
    pub fn new(identifier: String, error: Option<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            identifier,
            error,
        }
    }
}

impl_domain_event!(DetailSettled);

/// The detail overlay was dismissed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailClosed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl DetailClosed {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for DetailClosed {
    fn default() -> Self {
        Self::new()
    }
}

impl_domain_event!(DetailClosed);
