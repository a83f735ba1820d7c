//! Error types for the MLB prop scraper

use thiserror::Error;


pub type Result<T> = std::result::Result<T, PropsError>;

#[derive(Error, Debug)]
pub enum PropsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Unsupported stat market: {stat} (run `mlb-props markets` for the list)")]
    UnsupportedStat { stat: String },

    #[error("Invalid game window: {value} (must be a positive integer)")]
    InvalidWindow { value: String },

    #[error("Failed to fetch prop lines for {market}: {message}")]
    Offers { market: String, message: String },

    #[error("Failed to fetch game log for {player}: {message}")]
    GameLog { player: String, message: String },

    #[error("No prop lines posted for {market}")]
    NoOffers { market: String },
}
