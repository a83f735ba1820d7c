//! Command implementations for the MLB prop scraper CLI

pub mod markets;
pub mod scrape;

use std::path::PathBuf;

use crate::OUTPUT_DIR_ENV_VAR;

/// Resolve the report directory: explicit flag, then the
/// `MLB_PROPS_OUTPUT_DIR` env var, then the current directory.
pub fn resolve_output_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(OUTPUT_DIR_ENV_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
