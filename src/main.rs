// src/main.rs

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Notify;

use movie_explorer::events::{
    DetailClosed, DetailRequested, DetailSettled, DomainEvent, EventBus, SearchSettled,
    SearchStarted,
};
use movie_explorer::infrastructure::OmdbConfig;
use movie_explorer::integrations::OmdbClient;
use movie_explorer::services::{MovieApi, SearchController};
use movie_explorer::ui::{render_screen, PromptCommand, SearchInput, HELP_TEXT};

#[derive(Parser, Debug)]
#[command(name = "movie-explorer", version, about = "Search the OMDb movie database from the terminal")]
struct Cli {
    /// Title to search for right away
    query: Option<String>,

    /// OMDb API key
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// OMDb endpoint
    #[arg(long, env = "OMDB_BASE_URL")]
    base_url: Option<String>,

    /// JSON config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    // 1. CONFIGURATION
    let config = OmdbConfig::load(cli.config.as_deref())?.with_overrides(cli.api_key, cli.base_url);

    // 2. INFRASTRUCTURE
    let event_bus = Arc::new(EventBus::new());
    let api: Arc<dyn MovieApi> = Arc::new(OmdbClient::new(&config)?);

    // 3. CONTROLLER
    let controller = SearchController::new(api, Arc::clone(&event_bus));

    // 4. REDRAW WIRING
    let redraw = Arc::new(Notify::new());
    redraw_on::<SearchStarted>(&event_bus, &redraw);
    redraw_on::<SearchSettled>(&event_bus, &redraw);
    redraw_on::<DetailRequested>(&event_bus, &redraw);
    redraw_on::<DetailSettled>(&event_bus, &redraw);
    redraw_on::<DetailClosed>(&event_bus, &redraw);

    // 5. INTERACTIVE LOOP
    let mut input = SearchInput::new();
    draw(&controller)?;

    if let Some(query) = cli.query {
        input.set_draft(query);
        if let Some(query) = input.submit() {
            let _ = controller.submit_query(&query);
        }
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match PromptCommand::parse(&line) {
                    PromptCommand::Search(text) => {
                        input.set_draft(text);
                        match input.submit() {
                            Some(query) => {
                                let _ = controller.submit_query(&query);
                            }
                            None => prompt()?,
                        }
                    }
                    PromptCommand::Open(n) => {
                        let view = controller.view();
                        match view.cards().get(n - 1) {
                            Some(card) => {
                                let _ = controller.select_item(&card.identifier);
                            }
                            None => {
                                println!("No result #{} on screen.", n);
                                prompt()?;
                            }
                        }
                    }
                    PromptCommand::Close => controller.close_detail(),
                    PromptCommand::Help => {
                        println!("{}", HELP_TEXT);
                        prompt()?;
                    }
                    PromptCommand::Quit => break,
                    PromptCommand::Unknown(command) => {
                        println!("Unknown command {:?}, try :help", command);
                        prompt()?;
                    }
                }
            }
            _ = redraw.notified() => draw(&controller)?,
        }
    }

    Ok(())
}

fn redraw_on<E>(event_bus: &EventBus, redraw: &Arc<Notify>)
where
    E: DomainEvent + 'static,
{
    let redraw = Arc::clone(redraw);
    event_bus.subscribe::<E, _>(move |_| redraw.notify_one());
}

fn draw(controller: &SearchController) -> Result<()> {
    print!("\x1B[2J\x1B[H{}", render_screen(&controller.view()));
    prompt()
}

fn prompt() -> Result<()> {
    print!("search> ");
    std::io::stdout().flush()?;
    Ok(())
}
