// src/events/mod.rs
//
// Internal Event System - Public API

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{DetailClosed, DetailRequested, DetailSettled, SearchSettled, SearchStarted};

pub use bus::{EventBus, EventLogEntry, EVENT_LOG_CAPACITY};
