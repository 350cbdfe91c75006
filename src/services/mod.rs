// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod movie_api;
pub mod search_controller;


pub use movie_api::{MovieApi, FIRST_PAGE};
pub use search_controller::SearchController;
