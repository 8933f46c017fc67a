//! Type-safe wrappers for Yahoo Fantasy identifiers.

use crate::error::{Result, YahooError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Yahoo game keys (e.g. `423` for NFL 2023).
///
/// # Examples
///
/// ```rust
/// use yahoo_ffl::GameKey;
///
/// let game_key: GameKey = "423".parse().unwrap();
/// assert_eq!(game_key.as_str(), "423");
/// assert_eq!(game_key.league_key(12345), "423.l.12345");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameKey(pub String);

impl GameKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// League key for a league of this game: `{game_key}.l.{league_id}`.
    pub fn league_key(&self, league_id: u32) -> String {
        format!("{}.l.{}", self.0, league_id)
    }
}

impl fmt::Display for GameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameKey {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        crate::core::validate_key(s)?;
        Ok(Self(s.to_string()))
    }
}

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = YahooError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_key_from_str() {
        let key: GameKey = " 423 ".parse().unwrap();
        assert_eq!(key, GameKey::new("423"));
        assert_eq!(key.to_string(), "423");
    }

    #[test]
    fn test_game_key_rejects_path() {
        assert!("42/3".parse::<GameKey>().is_err());
        assert!("".parse::<GameKey>().is_err());
    }

    #[test]
    fn test_league_key() {
        assert_eq!(GameKey::new("423").league_key(169896), "423.l.169896");
    }

    #[test]
    fn test_season_from_str() {
        let season: Season = "2023".parse().unwrap();
        assert_eq!(season.as_u16(), 2023);
        assert_eq!(season.to_string(), "2023");
    }

    #[test]
    fn test_season_invalid() {
        match "twenty".parse::<Season>() {
            Err(YahooError::InvalidSeason(_)) => (),
            other => panic!("Expected InvalidSeason, got {:?}", other),
        }
    }
}
