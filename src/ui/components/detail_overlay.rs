// src/ui/components/detail_overlay.rs

use crate::application::DetailCard;

pub fn render_detail_overlay(card: &DetailCard, width: usize) -> String {
    let border = "#".repeat(width);
    let genres = card
        .genres
        .iter()
        .map(|genre| format!("[{}]", genre))
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format!("{}  (:close to dismiss)\n", card.title));
    out.push_str(&format!("{} • {} • {}\n", card.year, card.rated, card.runtime));
    if !genres.is_empty() {
        out.push_str(&genres);
        out.push('\n');
    }
    out.push_str(&format!("IMDb Rating: {}/10\n", card.imdb_rating));
    out.push_str(&format!("\nPlot\n  {}\n", card.plot));
    out.push_str(&format!("\nDirector\n  {}\n", card.director));
    out.push_str(&format!("Writer\n  {}\n", card.writer));
    out.push_str(&format!("Actors\n  {}\n", card.actors));
    out.push_str(&format!("\nPoster: {}\n", card.poster_url));
    out.push_str(&border);
    out.push('\n');
    out
}
