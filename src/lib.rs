//! Yahoo Fantasy Sports data library
//!
//! Saves query results from the Yahoo Fantasy Sports API to disk and loads
//! them back, either as raw structured data or as typed models.
//!
//! ## Features
//!
//! - **Save/Load**: Run a producer, persist its result as JSON, reload it any number of times
//! - **Directory Scoping**: Keep per-season records in their own sub-directory
//! - **Typed Models**: Rebuild `Game`, `StatCategories` and friends from saved data
//! - **Query Client**: Minimal authenticated client for game resources
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yahoo_ffl::{storage::YahooData, yahoo::Game, DataConfig, YahooError};
//! use serde_json::json;
//!
//! # fn example() -> yahoo_ffl::Result<()> {
//! let data = YahooData::new(DataConfig::from_env());
//!
//! let saved = data.save(
//!     "current-game-info",
//!     || Ok::<_, YahooError>(json!({
//!         "game_key": "423", "game_id": 423, "name": "Football", "code": "nfl", "season": 2023
//!     })),
//!     None,
//! )?;
//!
//! let game: Game = data.load_as("current-game-info", None)?;
//! assert_eq!(game.game_key, saved["game_key"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export YAHOO_FFL_DATA_DIR=~/fantasy-data
//! export YAHOO_ACCESS_TOKEN=...   # only needed for fetching
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod storage;
pub mod yahoo;

// Re-export commonly used types
pub use crate::core::DataConfig;
pub use error::{Result, YahooError};
pub use storage::{FromStructuredData, ModelData, YahooData};
pub use yahoo::{GameKey, Season};

pub const DATA_DIR_ENV_VAR: &str = "YAHOO_FFL_DATA_DIR";
pub const ACCESS_TOKEN_ENV_VAR: &str = "YAHOO_ACCESS_TOKEN";
pub const API_BASE_URL_ENV_VAR: &str = "YAHOO_API_BASE_URL";
