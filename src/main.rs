//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use mlb_props::{
    cli::{Commands, MlbProps},
    commands::{
        markets::handle_markets,
        scrape::{handle_scrape, ScrapeParams},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let app = MlbProps::parse();

    match app.command {
        Commands::Scrape { args } => {
            handle_scrape(ScrapeParams {
                stats: args.stats,
                window: args.games,
                output_dir: args.output_dir,
                parallel: args.parallel,
                refresh: args.refresh,
                as_json: args.json,
                debug: args.debug,
            })
            .await?
        }

        Commands::Markets => handle_markets(),
    }

    Ok(())
}
