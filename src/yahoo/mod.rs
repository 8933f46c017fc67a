//! Yahoo Fantasy Sports resources: typed models, record keys and the API client.

pub mod content;
pub mod http;
pub mod ids;
pub mod models;
pub mod records;

pub use http::YahooClient;
pub use ids::{GameKey, Season};
pub use models::{
    Game, GameWeek, PositionType, RosterPosition, Stat, StatCategories, StatGroup,
    StatPositionType,
};
pub use records::{
    current_game_key, game_keys_key, game_resource_key, season_dir, GameCode, GameResource,
};
