use reqwest::Client;
use serde_json::Value;

use crate::{cli::types::StatKind, Result};

/// Base path for the odds API.
pub const ODDS_API_BASE: &str = "https://api.bettingpros.com/v3";

/// Base path for player stats pages.
pub const PLAYER_PAGE_BASE: &str = "https://www.bettingpros.com/mlb/players";

pub fn player_page_url(slug: &str) -> String {
    format!("{PLAYER_PAGE_BASE}/{slug}/")
}

/// Fetch the raw offers board for one stat market.
pub async fn get_offers(client: &Client, stat: StatKind, debug: bool) -> Result<Value> {
    let url = format!("{ODDS_API_BASE}/offers");
    let params = [
        ("sport", "MLB"),
        ("market", stat.market_param()),
        ("limit", "250"),
    ];

    if debug {
        println!("GET {url}?sport=MLB&market={}&limit=250", stat.market_param());
    }

    let res = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;

    Ok(res)
}

/// Fetch a player's stats page HTML.
pub async fn get_player_page(client: &Client, slug: &str, debug: bool) -> Result<String> {
    let url = player_page_url(slug);

    if debug {
        println!("GET {url}");
    }

    let body = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(body)
}
