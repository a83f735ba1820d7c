use crate::cli::types::GameWindow;
use crate::props::types::{GameLogEntry, Venue, WindowAverages};


/// Average the N most recent games, overall and split by venue.
///
/// `entries` must be ordered most recent first, as the game-log parser
/// produces them. The home/away subsets are taken from within the
/// selected window, so `games` bounds every sample.
pub fn aggregate(entries: &[GameLogEntry], window: GameWindow) -> WindowAverages {
    let recent = &entries[..entries.len().min(window.as_usize())];

    let home: Vec<f64> = recent
        .iter()
        .filter(|e| e.venue == Venue::Home)
        .map(|e| e.value)
        .collect();
    let away: Vec<f64> = recent
        .iter()
        .filter(|e| e.venue == Venue::Away)
        .map(|e| e.value)
        .collect();
    let overall: Vec<f64> = recent.iter().map(|e| e.value).collect();

    WindowAverages {
        overall: mean(&overall),
        home: mean(&home),
        away: mean(&away),
        games: recent.len(),
    }
}

/// Arithmetic mean; `None` for an empty slice rather than zero, so a
/// missing sample never reads as a measured zero.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
