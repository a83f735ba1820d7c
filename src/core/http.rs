//! HTTP utilities shared by the odds API and player-page fetchers

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT},
    Client,
};
use std::time::Duration;

/// Desktop browser UA; the player pages 403 the reqwest default.
pub const USER_AGENT_STR: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared client used for every request in a run.
pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STR));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

    let client = Client::builder()
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    Ok(client)
}
