//! Game-log table parsing for player stats pages.
//!
//! Player pages carry several stat tables; the game log is located by
//! header shape (a matchup column plus the requested stat's column)
//! rather than by position, so layout reshuffles don't break the parse.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::cli::types::StatKind;
use crate::error::PropsError;
use crate::props::types::{GameLogEntry, Venue};
use crate::Result;


/// Parse a player page into game-log entries for one stat, most recent
/// game first (document order). Rows without a numeric stat value are
/// skipped. `player` is used for error context only.
pub fn parse_game_log(html: &str, stat: StatKind, player: &str) -> Result<Vec<GameLogEntry>> {
    let doc = Html::parse_document(html);
    let table_sel = sel("table");
    let row_sel = sel("tr");
    let cell_sel = sel("th, td");

    for table in doc.select(&table_sel) {
        let mut rows = table.select(&row_sel);

        let Some(header_row) = rows.next() else {
            continue;
        };
        let headers: Vec<String> = header_row.select(&cell_sel).map(cell_text).collect();

        let Some(stat_col) = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(stat.log_column()))
        else {
            continue;
        };
        let Some(matchup_col) = headers.iter().position(|h| is_matchup_header(h)) else {
            continue;
        };
        let date_col = headers
            .iter()
            .position(|h| h.to_lowercase().contains("date"))
            .unwrap_or(0);

        let mut entries = Vec::new();
        for row in rows {
            let cells: Vec<String> = row.select(&cell_sel).map(cell_text).collect();
            if cells.len() <= stat_col.max(matchup_col) {
                continue;
            }

            let Some(value) = parse_stat_value(&cells[stat_col]) else {
                debug!(
                    "skipping game-log row for {player}: unparseable {} value {:?}",
                    stat.log_column(),
                    cells[stat_col]
                );
                continue;
            };

            entries.push(GameLogEntry {
                date: cells.get(date_col).cloned().unwrap_or_default(),
                venue: Venue::from_matchup(&cells[matchup_col]),
                value,
            });
        }

        return Ok(entries);
    }

    Err(PropsError::GameLog {
        player: player.to_string(),
        message: format!("no game-log table with a {} column", stat.log_column()),
    })
}

fn is_matchup_header(header: &str) -> bool {
    let h = header.to_lowercase();
    h == "opp" || h.contains("matchup") || h.contains("opponent")
}

/// Extract the numeric value from a stat cell. Cells on prop pages are
/// sometimes prefixed with the over/under result marker (`O 1.5`).
pub(crate) fn parse_stat_value(raw: &str) -> Option<f64> {
    let mut tokens = raw.split_whitespace();
    let first = tokens.next()?;
    let token = if first.eq_ignore_ascii_case("o") || first.eq_ignore_ascii_case("u") {
        tokens.next()?
    } else {
        first
    };
    token.parse::<f64>().ok()
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn sel(selector: &str) -> Selector {
    Selector::parse(selector).expect("static selector")
}
