use crate::cli::types::StatKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};


/// Top-level envelope for the offers endpoint
#[derive(Debug, Deserialize)]
pub struct OffersEnvelope {
    #[serde(default)]
    pub offers: Vec<Offer>,
}

/// One posted prop offer from the odds API
#[derive(Debug, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub selections: Vec<Selection>,
}

/// The player an offer is posted for
#[derive(Debug, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// One side of an offer (over or under)
#[derive(Debug, Deserialize)]
pub struct Selection {
    pub label: String,
    #[serde(default)]
    pub line: Option<f64>,
    #[serde(default)]
    pub odds: Option<i32>,
}

/// Whether a game was played at the player's park.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    /// Game-log matchup cells read `vs BOS` at home and `@ NYY` on the road.
    pub fn from_matchup(matchup: &str) -> Self {
        if matchup.contains('@') {
            Venue::Away
        } else {
            Venue::Home
        }
    }
}

/// A posted prop line for one player in one stat market.
#[derive(Debug, Clone, Serialize)]
pub struct PropLine {
    pub player: String,
    pub team: Option<String>,
    /// URL slug for the player's stats page.
    pub slug: String,
    pub stat: StatKind,
    pub line: f64,
    pub over_odds: Option<i32>,
    pub under_odds: Option<i32>,
    /// Calendar date the board was fetched.
    pub date: NaiveDate,
}

/// One game parsed from a player's game-log table, most recent first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameLogEntry {
    /// Date text as the page prints it (e.g. `8/5`).
    pub date: String,
    pub venue: Venue,
    pub value: f64,
}

/// Averages over the recent-games window.
///
/// A `None` average means the subset held no games; it is never
/// collapsed to zero, which would read as "played and produced nothing".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowAverages {
    pub overall: Option<f64>,
    pub home: Option<f64>,
    pub away: Option<f64>,
    /// Games actually averaged; at most the configured window.
    pub games: usize,
}

/// A prop line joined with the player's recent-window averages.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub player: String,
    pub team: Option<String>,
    pub stat: StatKind,
    pub line: f64,
    pub over_odds: Option<i32>,
    pub under_odds: Option<i32>,
    #[serde(flatten)]
    pub averages: WindowAverages,
    pub date: NaiveDate,
}
