//! MLB Player Prop Scraper Library
//!
//! A Rust library for pulling MLB player proposition lines from a betting-odds
//! source, fetching each listed player's recent game log, and reporting how the
//! player's recent performance stacks up against the posted line.
//!
//! ## Features
//!
//! - **Prop Line Retrieval**: Fetch current over/under lines and odds per stat market
//! - **Game Log Scraping**: Parse a player's recent games from their stats page
//! - **Home/Away Splits**: Average the recent-games window overall and by venue
//! - **CSV Reports**: One overwrite-on-run report file per stat market
//! - **Partial Results**: A failing market or player is skipped, never fatal
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mlb_props::{GameWindow, StatKind, commands::scrape::*};
//!
//! # async fn example() -> mlb_props::Result<()> {
//! // Scrape hits and home runs over the last 10 games
//! let params = ScrapeParams {
//!     stats: vec![StatKind::Hits, StatKind::HomeRuns],
//!     window: GameWindow::new(10),
//!     // ... other parameters
//! #   output_dir: None,
//! #   parallel: 2,
//! #   refresh: false,
//! #   as_json: false,
//! #   debug: false,
//! };
//!
//! handle_scrape(params).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set a default report directory to avoid passing it in every command:
//! ```bash
//! export MLB_PROPS_OUTPUT_DIR=~/props
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod props;
pub mod report;

// Re-export commonly used types
pub use cli::types::{GameWindow, StatKind};
pub use error::{PropsError, Result};
pub use props::types::{GameLogEntry, PropLine, ReportRow, Venue, WindowAverages};

pub const OUTPUT_DIR_ENV_VAR: &str = "MLB_PROPS_OUTPUT_DIR";
