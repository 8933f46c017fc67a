//! Logical keys and directories for saved game data.
//!
//! Game-wide records live in the base data directory (`nfl-game_keys`,
//! `current-game-info`); records of a specific game live in that season's
//! sub-directory (`2023/423-game-info`).

use std::fmt;
use std::path::{Path, PathBuf};

use crate::yahoo::ids::{GameKey, Season};

/// Key of the current game's info record.
pub const CURRENT_GAME_INFO_KEY: &str = "current-game-info";

/// Key of the current game's metadata record.
pub const CURRENT_GAME_METADATA_KEY: &str = "current-game-metadata";

/// Fantasy sport, as used in Yahoo game codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum GameCode {
    Nfl,
    Nhl,
    Mlb,
    Nba,
}

impl GameCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCode::Nfl => "nfl",
            GameCode::Nhl => "nhl",
            GameCode::Mlb => "mlb",
            GameCode::Nba => "nba",
        }
    }
}

impl fmt::Display for GameCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-game resource that can be queried and saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum GameResource {
    Info,
    Metadata,
    Weeks,
    StatCategories,
    PositionTypes,
    RosterPositions,
}

impl GameResource {
    /// Suffix of the saved record key.
    pub fn key_suffix(&self) -> &'static str {
        match self {
            GameResource::Info => "info",
            GameResource::Metadata => "metadata",
            GameResource::Weeks => "weeks",
            GameResource::StatCategories => "stat_categories",
            GameResource::PositionTypes => "position_types",
            GameResource::RosterPositions => "roster_positions",
        }
    }

    /// Field of the game response carrying this resource; `None` for the game itself.
    pub fn game_field(&self) -> Option<&'static str> {
        match self {
            GameResource::Info | GameResource::Metadata => None,
            GameResource::Weeks => Some("game_weeks"),
            GameResource::StatCategories => Some("stat_categories"),
            GameResource::PositionTypes => Some("position_types"),
            GameResource::RosterPositions => Some("roster_positions"),
        }
    }

    /// Path appended to `game/{game_key}` on the API.
    ///
    /// Full game info bundles every sub-resource through an `out` modifier.
    pub fn api_path(&self) -> &'static str {
        match self {
            GameResource::Info => ";out=game_weeks,stat_categories,position_types,roster_positions",
            GameResource::Metadata => "/metadata",
            GameResource::Weeks => "/game_weeks",
            GameResource::StatCategories => "/stat_categories",
            GameResource::PositionTypes => "/position_types",
            GameResource::RosterPositions => "/roster_positions",
        }
    }
}

/// Key: `{code}-game_keys`
pub fn game_keys_key(code: GameCode) -> String {
    format!("{}-game_keys", code)
}

/// Key: `current-game-{resource}`
pub fn current_game_key(resource: GameResource) -> String {
    format!("current-game-{}", resource.key_suffix())
}

/// Key: `{game_key}-game-{resource}`
pub fn game_resource_key(game_key: &GameKey, resource: GameResource) -> String {
    format!("{}-game-{}", game_key, resource.key_suffix())
}

/// Path: {data_dir}/{season}
pub fn season_dir(data_dir: &Path, season: Season) -> PathBuf {
    data_dir.join(season.to_string())
}
