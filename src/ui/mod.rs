// src/ui/mod.rs
//
// Text front-end: components, the screen renderer and prompt parsing
//
// RULES:
// - Consumes application::ViewModel read-only
// - Produces strings or parsed user intents, never touches the network or state

pub mod components;
pub mod prompt;
pub mod renderer;
pub mod search_input;

pub use prompt::{PromptCommand, HELP_TEXT};
pub use renderer::{render_screen, SCREEN_WIDTH};
pub use search_input::SearchInput;
