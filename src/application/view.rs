// src/application/view.rs
//
// What the screen shows, as a pure function of SearchState.
// Renderers consume ViewModel and never look at SearchState directly.

use serde::Serialize;

use crate::application::state::SearchState;
use crate::domain::{MovieDetail, SearchResultSummary};

/// Main area below the search input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum MainPanel {
    Loading,
    Error { message: String },
    /// Nothing has been searched yet
    Welcome,
    Grid { cards: Vec<ResultCard> },
    /// A search settled without error and without results
    Empty,
}

/// One clickable entry of the result grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultCard {
    pub identifier: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
}

impl From<&SearchResultSummary> for ResultCard {
    fn from(summary: &SearchResultSummary) -> Self {
        Self {
            identifier: summary.identifier.clone(),
            title: summary.title.clone(),
            year: summary.year.clone(),
            poster_url: summary.poster.display_url().to_string(),
        }
    }
}

/// Content of the detail overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailCard {
    pub identifier: String,
    pub title: String,
    pub year: String,
    pub rated: String,
    pub runtime: String,
    pub genres: Vec<String>,
    pub imdb_rating: String,
    pub plot: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub poster_url: String,
}

impl From<&MovieDetail> for DetailCard {
    fn from(detail: &MovieDetail) -> Self {
        Self {
            identifier: detail.identifier.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            rated: detail.rated.clone(),
            runtime: detail.runtime.clone(),
            genres: detail.genres.clone(),
            imdb_rating: detail.imdb_rating.clone(),
            plot: detail.plot.clone(),
            director: detail.director.clone(),
            writer: detail.writer.clone(),
            actors: detail.actors.clone(),
            poster_url: detail.poster.display_url().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    /// "N movies found", shown whenever the count is positive
    pub results_banner: Option<String>,
    pub main: MainPanel,
    /// Drawn on top of everything else
    pub overlay: Option<DetailCard>,
}

impl ViewModel {
    pub fn from_state(state: &SearchState) -> Self {
        let results_banner = (state.total_result_count > 0)
            .then(|| format!("{} movies found", state.total_result_count));

        let main = if state.is_loading {
            MainPanel::Loading
        } else if let Some(message) = &state.error_message {
            MainPanel::Error {
                message: message.clone(),
            }
        } else if state.result_list.is_empty() && !state.has_searched() {
            MainPanel::Welcome
        } else if !state.result_list.is_empty() {
            MainPanel::Grid {
                cards: state.result_list.iter().map(ResultCard::from).collect(),
            }
        } else {
            MainPanel::Empty
        };

        let overlay = state.selected_detail.as_ref().map(DetailCard::from);

        Self {
            results_banner,
            main,
            overlay,
        }
    }

    /// Cards of the grid, empty unless the grid is the main panel
    pub fn cards(&self) -> &[ResultCard] {
        match &self.main {
            MainPanel::Grid { cards } => cards.as_slice(),
            _ => &[],
        }
    }
}
