//! Odds-source integration: offer board fetching, game-log scraping,
//! and recent-window aggregation.

pub mod compute;
pub mod gamelog;
pub mod http;
pub mod offers;
pub mod types;
