//! Core utilities for the MLB prop scraper
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system caching utilities
//! - `http`: Shared HTTP client construction

pub mod cache;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::{offers_cache_path, try_read_to_string, write_string};
pub use http::build_client;
