//! Interactive terminal front end for the TVMaze widget.
//!
//! Stands in for the page: a line of input is a search submission,
//! `e <n>` activates the Episodes control of card `n`, `q` quits. After
//! each action the current view snapshot is printed.

use std::io::{self, Write as _};

use clap::Parser;

use tvmaze_core::{ClientConfig, TvMazeCatalog};
use tvmaze_widget::{EpisodesOutcome, SearchOutcome, ShowBrowser, ViewSnapshot};

mod cli;
mod logging;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let mut config = ClientConfig::default();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    let catalog = match TvMazeCatalog::with_config(config) {
        Ok(catalog) => catalog,
        Err(error) => {
            eprintln!("Error: cannot initialize the catalog client: {error}");
            std::process::exit(1);
        }
    };
    let browser = ShowBrowser::new(catalog);

    if let Some(term) = cli.term.as_deref() {
        run_search(&browser, term).await;
    }

    println!("Type a search term, `e <n>` for the episodes of card n, `q` to quit.");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(error) => {
                eprintln!("Error reading input: {error}");
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "q" || input == "quit" {
            break;
        }

        match parse_episode_command(input) {
            Some(card_index) => run_episodes(&browser, card_index).await,
            None => run_search(&browser, input).await,
        }
    }
}

/// Parse `e <n>` into the zero-based index of card `n`.
fn parse_episode_command(input: &str) -> Option<usize> {
    let rest = input.strip_prefix('e')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let number: usize = rest.trim().parse().ok()?;
    number.checked_sub(1)
}

async fn run_search(browser: &ShowBrowser, term: &str) {
    match browser.submit_search(term).await {
        SearchOutcome::Rendered(count) => {
            println!("\n{count} result(s) for '{term}':");
            print_view(&browser.view().await);
        }
        SearchOutcome::Failed => println!("Search failed; nothing to show."),
        SearchOutcome::Superseded => {}
    }
}

async fn run_episodes(browser: &ShowBrowser, card_index: usize) {
    match browser.activate_episodes(card_index).await {
        EpisodesOutcome::Rendered(_) => print_view(&browser.view().await),
        EpisodesOutcome::Failed => println!("Could not load episodes; see the log for details."),
        EpisodesOutcome::UnknownCard => println!("No card with that number."),
        EpisodesOutcome::Superseded => {}
    }
}

fn print_view(view: &ViewSnapshot) {
    for (position, card) in view.shows.cards().iter().enumerate() {
        println!("\n{}. {}", position + 1, card.name);
        println!("   image: {}", card.image_url);
        if !card.summary.is_empty() {
            println!("   {}", card.summary);
        }
        println!("   [e {}] {}", position + 1, card.control_label);
    }

    if view.episodes.is_visible() {
        println!("\nEpisodes:");
        for entry in view.episodes.entries() {
            println!("  - {entry}");
        }
    }
    println!();
}
