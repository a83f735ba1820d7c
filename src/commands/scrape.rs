//! Prop board scraping and report generation.
//!
//! This is the pipeline behind `mlb-props scrape`: fetch the offers
//! board per market, pull each listed player's game log, average the
//! recent window, and write one CSV report per market.
//!
//! A market that fails to fetch is skipped and reported; a player whose
//! page cannot be fetched or parsed is excluded from that market's
//! report. Neither aborts the run.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use reqwest::Client;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::{
    cli::types::{GameWindow, StatKind},
    core::http::build_client,
    error::PropsError,
    props::{
        compute::aggregate,
        gamelog::parse_game_log,
        http::get_player_page,
        offers::load_or_fetch_offers,
        types::{PropLine, ReportRow, WindowAverages},
    },
    report::{fmt_avg, fmt_odds, write_report},
    Result,
};

use super::resolve_output_dir;

#[cfg(test)]
mod tests;

/// Configuration parameters for a scrape run.
#[derive(Debug)]
pub struct ScrapeParams {
    pub stats: Vec<StatKind>,
    pub window: GameWindow,
    pub output_dir: Option<PathBuf>,
    pub parallel: u8,
    pub refresh: bool,
    pub as_json: bool,
    pub debug: bool,
}

/// Per-market result of a scrape.
#[derive(Debug)]
pub struct MarketOutcome {
    pub stat: StatKind,
    pub path: PathBuf,
    pub rows: Vec<ReportRow>,
    /// Players excluded because their game log failed to fetch or parse.
    pub skipped: usize,
}

/// Scrape every requested market and write its report.
///
/// Markets run concurrently in batches of `parallel`; players within a
/// market fetch sequentially. Failed markets are logged and reported at
/// the end without failing the run, so partial results still land on
/// disk.
pub async fn handle_scrape(params: ScrapeParams) -> Result<()> {
    let out_dir = resolve_output_dir(params.output_dir);
    let client = build_client()?;
    let today = Local::now().date_naive();

    // Repeated -s flags collapse to one scrape per market
    let mut stats = params.stats;
    let mut seen = HashSet::new();
    stats.retain(|s| seen.insert(*s));

    let mut outcomes = Vec::new();
    let mut failures = Vec::new();

    for batch in stats.chunks(params.parallel.max(1) as usize) {
        let mut set = JoinSet::new();
        for &stat in batch {
            let client = client.clone();
            let out_dir = out_dir.clone();
            let window = params.window;
            let (refresh, debug) = (params.refresh, params.debug);
            set.spawn(async move {
                let outcome =
                    scrape_market(&client, stat, window, &out_dir, today, refresh, debug).await;
                (stat, outcome)
            });
        }

        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((stat, Ok(outcome))) => {
                    info!("{}: wrote {} rows", stat, outcome.rows.len());
                    outcomes.push(outcome);
                }
                Ok((stat, Err(e))) => {
                    error!("skipping {}: {}", stat, e);
                    failures.push((stat, e));
                }
                Err(e) => error!("market task failed: {}", e),
            }
        }
    }

    outcomes.sort_by_key(|o| o.stat);

    if params.as_json {
        let by_market: BTreeMap<&str, &Vec<ReportRow>> = outcomes
            .iter()
            .map(|o| (o.stat.slug(), &o.rows))
            .collect();
        println!("{}", serde_json::to_string_pretty(&by_market)?);
    } else {
        for outcome in &outcomes {
            print_market(outcome, params.window);
        }
        println!();
        for outcome in &outcomes {
            println!(
                "✓ {}: {} rows ({} skipped) -> {}",
                outcome.stat,
                outcome.rows.len(),
                outcome.skipped,
                outcome.path.display()
            );
        }
        for (stat, e) in &failures {
            println!("⚠ {stat}: {e}");
        }
    }

    Ok(())
}

/// Scrape one market: offers, game logs, averages, report file.
async fn scrape_market(
    client: &Client,
    stat: StatKind,
    window: GameWindow,
    out_dir: &Path,
    date: NaiveDate,
    refresh: bool,
    debug: bool,
) -> Result<MarketOutcome> {
    let lines = load_or_fetch_offers(client, stat, date, refresh, debug)
        .await
        .map_err(|e| PropsError::Offers {
            market: stat.to_string(),
            message: e.to_string(),
        })?;
    if lines.is_empty() {
        return Err(PropsError::NoOffers {
            market: stat.to_string(),
        });
    }
    info!("{}: {} prop lines posted", stat, lines.len());

    let mut averages = BTreeMap::new();
    let mut skipped = 0usize;
    for line in &lines {
        match fetch_player_averages(client, line, window, debug).await {
            Ok(avg) => {
                averages.insert(line.player.clone(), avg);
            }
            Err(e) => {
                warn!("excluding {} from {} report: {}", line.player, stat, e);
                skipped += 1;
            }
        }
    }

    let rows = build_report_rows(&lines, &averages);
    let path = write_report(out_dir, stat, &rows)?;

    Ok(MarketOutcome {
        stat,
        path,
        rows,
        skipped,
    })
}

/// Fetch and parse one player's game log, then average the window.
async fn fetch_player_averages(
    client: &Client,
    line: &PropLine,
    window: GameWindow,
    debug: bool,
) -> Result<WindowAverages> {
    let html = get_player_page(client, &line.slug, debug)
        .await
        .map_err(|e| PropsError::GameLog {
            player: line.player.clone(),
            message: e.to_string(),
        })?;
    let entries = parse_game_log(&html, line.stat, &line.player)?;
    Ok(aggregate(&entries, window))
}

/// Join prop lines with computed averages into report rows.
///
/// Players absent from `averages` (failed fetch/parse) are excluded.
/// Rows come back sorted by player name so a re-run over identical data
/// produces an identical file.
pub fn build_report_rows(
    lines: &[PropLine],
    averages: &BTreeMap<String, WindowAverages>,
) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = lines
        .iter()
        .filter_map(|line| {
            averages.get(&line.player).map(|avg| ReportRow {
                player: line.player.clone(),
                team: line.team.clone(),
                stat: line.stat,
                line: line.line,
                over_odds: line.over_odds,
                under_odds: line.under_odds,
                averages: *avg,
                date: line.date,
            })
        })
        .collect();
    rows.sort_by(|a, b| a.player.cmp(&b.player));
    rows
}

fn print_market(outcome: &MarketOutcome, window: GameWindow) {
    println!("\n{} (last {} games)", outcome.stat, window);
    println!(
        "{:<24} {:>6} {:>7} {:>7} {:>6} {:>6} {:>6} {:>3}",
        "Player", "Line", "Over", "Under", "Avg", "Home", "Away", "G"
    );
    println!("{}", "-".repeat(70));
    for row in &outcome.rows {
        println!(
            "{:<24} {:>6} {:>7} {:>7} {:>6} {:>6} {:>6} {:>3}",
            row.player,
            row.line,
            fmt_odds(row.over_odds),
            fmt_odds(row.under_odds),
            fmt_avg(row.averages.overall),
            fmt_avg(row.averages.home),
            fmt_avg(row.averages.away),
            row.averages.games
        );
    }
}
