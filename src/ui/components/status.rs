// src/ui/components/status.rs
//
// Banner and the non-grid main panels

pub fn render_results_banner(banner: &str) -> String {
    format!("» {}\n", banner)
}

pub fn render_loading() -> String {
    "⏳ Loading...\n".to_string()
}

pub fn render_error(message: &str) -> String {
    format!("⚠ {}\n", message)
}

pub fn render_welcome() -> String {
    "🎬 Welcome to Movie Explorer!\n   Search for a movie above to get started.\n".to_string()
}

pub fn render_empty() -> String {
    "No movies to show.\n".to_string()
}
