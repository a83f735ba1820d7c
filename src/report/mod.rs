//! CSV report writing: one file per stat market, overwritten each run.

use std::path::{Path, PathBuf};

use crate::cli::types::StatKind;
use crate::props::types::ReportRow;
use crate::Result;


/// Report file for a market: `<dir>/<slug>_player_props.csv`
pub fn report_path(dir: &Path, stat: StatKind) -> PathBuf {
    dir.join(format!("{}_player_props.csv", stat.slug()))
}

/// Write a market's rows to its report file, replacing any previous
/// run's file. Rows are written in the order given; undefined averages
/// and missing odds serialize as empty fields.
pub fn write_report(dir: &Path, stat: StatKind, rows: &[ReportRow]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = report_path(dir, stat);

    let mut wtr = csv::Writer::from_path(&path)?;
    wtr.write_record([
        "player", "team", "line", "over_odds", "under_odds", "avg", "home_avg", "away_avg",
        "games", "date",
    ])?;

    for row in rows {
        wtr.write_record(&[
            row.player.clone(),
            row.team.clone().unwrap_or_default(),
            row.line.to_string(),
            fmt_odds(row.over_odds),
            fmt_odds(row.under_odds),
            fmt_avg(row.averages.overall),
            fmt_avg(row.averages.home),
            fmt_avg(row.averages.away),
            row.averages.games.to_string(),
            row.date.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(path)
}

pub(crate) fn fmt_avg(avg: Option<f64>) -> String {
    avg.map(|v| format!("{v:.2}")).unwrap_or_default()
}

pub(crate) fn fmt_odds(odds: Option<i32>) -> String {
    odds.map(|o| format!("{o:+}")).unwrap_or_default()
}
