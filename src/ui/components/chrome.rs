// src/ui/components/chrome.rs
//
// Static header and footer

use chrono::{Datelike, Local};

pub const APP_NAME: &str = "Movie Explorer";

/// Title line plus navigation. Favorites is listed but leads nowhere.
pub fn render_header(width: usize) -> String {
    let rule = "=".repeat(width);
    format!("{}\n🎬 {}    [Home]  Favorites  About\n{}\n", rule, APP_NAME, rule)
}

pub fn render_footer(width: usize) -> String {
    render_footer_for_year(width, Local::now().year())
}

fn render_footer_for_year(width: usize, year: i32) -> String {
    format!(
        "{}\n© {} {} | Data provided by OMDb API (http://www.omdbapi.com/)\n",
        "-".repeat(width),
        year,
        APP_NAME
    )
}
