//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{GameWindow, StatKind};

/// Arguments for the `scrape` subcommand.
#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Stat market to scrape (repeatable): `-s hits -s home-runs`.
    #[clap(short = 's', long = "stat", required = true, value_parser = clap::value_parser!(StatKind))]
    pub stats: Vec<StatKind>,

    /// Number of recent games to average over.
    #[clap(long, short, default_value_t = GameWindow::default())]
    pub games: GameWindow,

    /// Report directory (or set `MLB_PROPS_OUTPUT_DIR` env var; defaults to `.`).
    #[clap(long, short)]
    pub output_dir: Option<PathBuf>,

    /// Concurrent market scrapes (1-4).
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub parallel: u8,

    /// Force refresh from the odds API even if today's offers are cached.
    #[clap(long)]
    pub refresh: bool,

    /// Output report rows as JSON instead of text tables.
    #[clap(long)]
    pub json: bool,

    /// Print request URLs for debugging.
    #[clap(long)]
    pub debug: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "mlb-props", about = "MLB player prop scraper")]
pub struct MlbProps {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scrape prop lines and recent-game averages, one CSV report per market.
    ///
    /// Fetches the current prop board per market, pulls each listed
    /// player's game log, and averages the last N games overall and
    /// split by home/away.
    Scrape {
        #[clap(flatten)]
        args: ScrapeArgs,
    },

    /// List the supported stat markets.
    Markets,
}
