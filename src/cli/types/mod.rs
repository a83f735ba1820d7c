//! Type-safe wrappers and enums for the prop scraper CLI.

pub mod stat;
pub mod window;

pub use stat::StatKind;
pub use window::GameWindow;
