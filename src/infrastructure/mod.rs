// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Supporting details that are not part of the domain itself.

pub mod config;

pub use config::{OmdbConfig, DEFAULT_API_KEY, DEFAULT_BASE_URL};
