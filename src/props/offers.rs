// src/props/offers.rs
use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::core::{offers_cache_path, try_read_to_string, write_string};
use crate::props::http::get_offers;
use crate::props::types::{OffersEnvelope, PropLine};
use crate::{cli::types::StatKind, Result};

/// Try to load today's offers board from .cache first. If missing, stale, or
/// `refresh == true`, fetch from the odds API and re-write the cache.
pub async fn load_or_fetch_offers(
    client: &Client,
    stat: StatKind,
    date: NaiveDate,
    refresh: bool,
    debug_urls: bool,
) -> Result<Vec<PropLine>> {
    let path = offers_cache_path(stat, date);

    // 1) Try cache (unless refresh)
    if !refresh {
        if let Some(s) = try_read_to_string(&path) {
            if let Ok(payload) = serde_json::from_str::<Value>(&s) {
                if let Ok(lines) = lines_from_payload(&payload, stat, date) {
                    debug!("loaded {} cached offers for {}", lines.len(), stat);
                    return Ok(lines);
                }
            }
            // Malformed cache entries fall through to a live fetch
            warn!("ignoring unreadable offers cache at {}", path.display());
        }
    }

    // 2) Fetch from API (raw payload, cached verbatim)
    let payload = get_offers(client, stat, debug_urls).await?;

    // 3) Write cache
    if let Ok(json_str) = serde_json::to_string_pretty(&payload) {
        let _ = write_string(&path, &json_str);
    }

    lines_from_payload(&payload, stat, date)
}

/// Deserialize a raw offers payload and flatten it into prop lines.
pub fn lines_from_payload(payload: &Value, stat: StatKind, date: NaiveDate) -> Result<Vec<PropLine>> {
    let envelope: OffersEnvelope = serde_json::from_value(payload.clone())?;
    Ok(flatten_offers(envelope, stat, date))
}

/// Flatten wire offers into one `PropLine` per player.
///
/// Offers without a participant or a posted line are dropped; a second
/// offer for a player already seen is ignored (the board occasionally
/// posts alternate lines for the same market).
pub fn flatten_offers(envelope: OffersEnvelope, stat: StatKind, date: NaiveDate) -> Vec<PropLine> {
    let mut seen = HashSet::new();
    let mut lines = Vec::new();

    for offer in envelope.offers {
        let Some(participant) = offer.participants.first() else {
            debug!("skipping {} offer with no participant", stat);
            continue;
        };

        let over = offer
            .selections
            .iter()
            .find(|s| s.label.eq_ignore_ascii_case("over"));
        let under = offer
            .selections
            .iter()
            .find(|s| s.label.eq_ignore_ascii_case("under"));

        let Some(line) = over.and_then(|s| s.line).or_else(|| under.and_then(|s| s.line)) else {
            debug!("skipping {} offer for {}: no posted line", stat, participant.name);
            continue;
        };

        let slug = participant
            .slug
            .clone()
            .unwrap_or_else(|| player_slug(&participant.name));
        if !seen.insert(slug.clone()) {
            continue;
        }

        lines.push(PropLine {
            player: participant.name.clone(),
            team: participant.team.clone(),
            slug,
            stat,
            line,
            over_odds: over.and_then(|s| s.odds),
            under_odds: under.and_then(|s| s.odds),
            date,
        });
    }

    lines
}

/// Derive a page slug from a player name: `Bobby Witt Jr.` -> `bobby-witt-jr`.
pub fn player_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.trim().to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_dash = false;
        } else if (c == ' ' || c == '-' || c == '.') && !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}
