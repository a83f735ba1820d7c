//! File system caching for raw odds API payloads.
//!
//! Offers boards change throughout the day but are stable enough to
//! reuse within one; payloads are cached per market per calendar date
//! so repeated runs (e.g. with a different window) skip the network.

use chrono::NaiveDate;
use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::cli::types::StatKind;

/// Cache root: `~/.cache/mlb-props/` (platform equivalent).
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("mlb-props")
}

/// Path: `~/.cache/mlb-props/offers_{slug}_{date}.json`
pub fn offers_cache_path(stat: StatKind, date: NaiveDate) -> PathBuf {
    cache_root().join(format!("offers_{}_{}.json", stat.slug(), date))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
