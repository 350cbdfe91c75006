// src/ui/components/result_grid.rs
//
// Result grid and result item renderers.
// Items are numbered from 1; the number is what `:open N` refers to.

use crate::application::ResultCard;

pub fn render_result_item(index: usize, card: &ResultCard) -> String {
    format!(
        "{:>3}. {} ({})  [{}]\n     poster: {}\n",
        index + 1,
        card.title,
        card.year,
        card.identifier,
        card.poster_url
    )
}

pub fn render_result_grid(cards: &[ResultCard]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| render_result_item(index, card))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PLACEHOLDER_POSTER_URL;

    #[test]
    fn test_grid_numbers_items_from_one() {
        let cards = vec![
            ResultCard {
                identifier: "tt0083658".to_string(),
                title: "Blade Runner".to_string(),
                year: "1982".to_string(),
                poster_url: PLACEHOLDER_POSTER_URL.to_string(),
            },
            ResultCard {
                identifier: "tt1856101".to_string(),
                title: "Blade Runner 2049".to_string(),
                year: "2017".to_string(),
                poster_url: "https://img/br2049.jpg".to_string(),
            },
        ];

        let grid = render_result_grid(&cards);
        assert!(grid.contains("  1. Blade Runner (1982)  [tt0083658]"));
        assert!(grid.contains("  2. Blade Runner 2049 (2017)"));
        assert!(grid.contains(PLACEHOLDER_POSTER_URL));
        assert!(!grid.contains("N/A"));
    }
}
