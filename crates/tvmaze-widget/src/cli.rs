//! Command-line surface of the widget.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "tvmaze-widget")]
#[command(about = "Search TVMaze shows and browse their episode lists")]
#[command(version)]
pub struct Cli {
    /// Search term to submit on startup
    pub term: Option<String>,

    /// Base URL of the catalog API (defaults to the public TVMaze endpoint)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}
