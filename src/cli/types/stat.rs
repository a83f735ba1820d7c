//! Supported MLB stat markets.

use crate::error::PropsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MLB player stat markets with posted prop lines.
///
/// Covers the batting and pitching markets the odds source offers
/// player props for. Each market knows its API identifier, the
/// abbreviation used in game-log table headers, and the slug used
/// for report file names.
///
/// # Examples
///
/// ```rust
/// use mlb_props::StatKind;
///
/// let hr: StatKind = "home-runs".parse().unwrap();
/// assert_eq!(hr, StatKind::HomeRuns);
/// assert_eq!(hr.to_string(), "Home Runs");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatKind {
    HomeRuns,
    Hits,
    Runs,
    Rbi,
    Strikeouts,
    Doubles,
    TotalBases,
    Singles,
    StolenBases,
    EarnedRuns,
}

impl StatKind {
    /// Every supported market, in menu order.
    pub const ALL: [StatKind; 10] = [
        StatKind::HomeRuns,
        StatKind::Hits,
        StatKind::Runs,
        StatKind::Rbi,
        StatKind::Strikeouts,
        StatKind::Doubles,
        StatKind::TotalBases,
        StatKind::Singles,
        StatKind::StolenBases,
        StatKind::EarnedRuns,
    ];

    /// Market identifier sent to the odds API.
    pub fn market_param(&self) -> &'static str {
        match self {
            StatKind::HomeRuns => "home-runs",
            StatKind::Hits => "hits",
            StatKind::Runs => "runs",
            StatKind::Rbi => "rbi",
            StatKind::Strikeouts => "strikeouts",
            StatKind::Doubles => "doubles",
            StatKind::TotalBases => "total-bases",
            StatKind::Singles => "singles",
            StatKind::StolenBases => "stolen-bases",
            StatKind::EarnedRuns => "earned-runs",
        }
    }

    /// Column abbreviation in a player's game-log table.
    pub fn log_column(&self) -> &'static str {
        match self {
            StatKind::HomeRuns => "HR",
            StatKind::Hits => "H",
            StatKind::Runs => "R",
            StatKind::Rbi => "RBI",
            StatKind::Strikeouts => "SO",
            StatKind::Doubles => "2B",
            StatKind::TotalBases => "TB",
            StatKind::Singles => "1B",
            StatKind::StolenBases => "SB",
            StatKind::EarnedRuns => "ER",
        }
    }

    /// Snake-case slug used in report file names.
    pub fn slug(&self) -> &'static str {
        match self {
            StatKind::HomeRuns => "home_runs",
            StatKind::Hits => "hits",
            StatKind::Runs => "runs",
            StatKind::Rbi => "rbi",
            StatKind::Strikeouts => "strikeouts",
            StatKind::Doubles => "doubles",
            StatKind::TotalBases => "total_bases",
            StatKind::Singles => "singles",
            StatKind::StolenBases => "stolen_bases",
            StatKind::EarnedRuns => "earned_runs",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatKind::HomeRuns => "Home Runs",
            StatKind::Hits => "Hits",
            StatKind::Runs => "Runs",
            StatKind::Rbi => "RBI",
            StatKind::Strikeouts => "Strikeouts",
            StatKind::Doubles => "Doubles",
            StatKind::TotalBases => "Total Bases",
            StatKind::Singles => "Singles",
            StatKind::StolenBases => "Stolen Bases",
            StatKind::EarnedRuns => "Earned Runs",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for StatKind {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "home-runs" | "hr" => Ok(StatKind::HomeRuns),
            "hits" | "h" => Ok(StatKind::Hits),
            "runs" | "r" => Ok(StatKind::Runs),
            "rbi" | "rbis" => Ok(StatKind::Rbi),
            "strikeouts" | "so" | "ks" => Ok(StatKind::Strikeouts),
            "doubles" | "2b" => Ok(StatKind::Doubles),
            "total-bases" | "tb" => Ok(StatKind::TotalBases),
            "singles" | "1b" => Ok(StatKind::Singles),
            "stolen-bases" | "steals" | "sb" => Ok(StatKind::StolenBases),
            "earned-runs" | "er" => Ok(StatKind::EarnedRuns),
            _ => Err(PropsError::UnsupportedStat {
                stat: s.to_string(),
            }),
        }
    }
}
