//! Recent-games window newtype.

use crate::error::PropsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of most-recent games to average over.
///
/// Always positive; parsing rejects zero, negative, and non-numeric
/// input before any network work happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameWindow(pub u16);

impl GameWindow {
    pub fn new(games: u16) -> Self {
        Self(games)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl Default for GameWindow {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for GameWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameWindow {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let games: u16 = s.trim().parse().map_err(|_| PropsError::InvalidWindow {
            value: s.to_string(),
        })?;
        if games == 0 {
            return Err(PropsError::InvalidWindow {
                value: s.to_string(),
            });
        }
        Ok(Self(games))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positive() {
        assert_eq!("5".parse::<GameWindow>().unwrap(), GameWindow::new(5));
        assert_eq!(" 12 ".parse::<GameWindow>().unwrap(), GameWindow::new(12));
    }

    #[test]
    fn test_parse_zero_rejected() {
        assert!(matches!(
            "0".parse::<GameWindow>(),
            Err(PropsError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_parse_negative_rejected() {
        assert!(matches!(
            "-3".parse::<GameWindow>(),
            Err(PropsError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_parse_garbage_rejected() {
        let err = "five".parse::<GameWindow>().unwrap_err();
        match err {
            PropsError::InvalidWindow { value } => assert_eq!(value, "five"),
            other => panic!("Expected InvalidWindow, got {other:?}"),
        }
    }

    #[test]
    fn test_default_window() {
        assert_eq!(GameWindow::default().as_u16(), 5);
    }
}
