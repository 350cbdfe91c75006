// src/ui/renderer.rs
//
// Top-level rendering coordinator
//
// ARCHITECTURE:
// - One full screen from a ViewModel: header, banner, main panel, overlay, footer
// - Pure; the caller decides where the text goes

use crate::application::{MainPanel, ViewModel};
use crate::ui::components::{self, status};

/// Width used for rules and borders
pub const SCREEN_WIDTH: usize = 72;

pub fn render_screen(view: &ViewModel) -> String {
    let mut out = components::render_header(SCREEN_WIDTH);

    if let Some(banner) = &view.results_banner {
        out.push_str(&status::render_results_banner(banner));
    }

    out.push_str(&render_main_panel(&view.main));

    if let Some(card) = &view.overlay {
        out.push_str(&components::render_detail_overlay(card, SCREEN_WIDTH));
    }

    out.push_str(&components::render_footer(SCREEN_WIDTH));
    out
}

fn render_main_panel(panel: &MainPanel) -> String {
    match panel {
        MainPanel::Loading => status::render_loading(),
        MainPanel::Error { message } => status::render_error(message),
        MainPanel::Welcome => status::render_welcome(),
        MainPanel::Grid { cards } => components::render_result_grid(cards),
        MainPanel::Empty => status::render_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ResultCard, SearchState};

    #[test]
    fn test_first_screen_is_welcome() {
        let screen = render_screen(&ViewModel::from_state(&SearchState::new()));
        assert!(screen.contains("Welcome to Movie Explorer!"));
        assert!(!screen.contains("movies found"));
    }

    #[test]
    fn test_loading_screen_keeps_banner() {
        let view = ViewModel {
            results_banner: Some("3 movies found".to_string()),
            main: MainPanel::Loading,
            overlay: None,
        };
        let screen = render_screen(&view);
        assert!(screen.contains("3 movies found"));
        assert!(screen.contains("Loading"));
    }

    #[test]
    fn test_grid_screen() {
        let view = ViewModel {
            results_banner: Some("1 movies found".to_string()),
            main: MainPanel::Grid {
                cards: vec![ResultCard {
                    identifier: "tt0114369".to_string(),
                    title: "Se7en".to_string(),
                    year: "1995".to_string(),
                    poster_url: "https://img/se7en.jpg".to_string(),
                }],
            },
            overlay: None,
        };
        let screen = render_screen(&view);
        assert!(screen.contains("1. Se7en (1995)"));
        assert!(!screen.contains("Welcome"));
    }
}
