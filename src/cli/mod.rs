//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use crate::yahoo::{GameCode, GameKey, GameResource, Season};
use clap::{Args, Parser, Subcommand};
use types::ModelKind;

/// Directory override shared between record commands
#[derive(Debug, Args)]
pub struct DirArgs {
    /// Read/write the record in this directory instead of the data directory.
    #[clap(long)]
    pub dir: Option<PathBuf>,

    /// Use the season sub-directory of the data directory (e.g. 2023).
    #[clap(long, short, conflicts_with = "dir")]
    pub season: Option<Season>,
}

#[derive(Debug, Subcommand)]
pub enum DataCmd {
    /// Query the Yahoo Fantasy API and save the result.
    ///
    /// Without `--game-key` saves the list of every game for `--code`;
    /// `--current` saves a resource of the sport's current game instead.
    Fetch {
        /// Sport of the game.
        #[clap(long, short, value_enum, default_value_t = GameCode::Nfl)]
        code: GameCode,

        /// Game key (e.g. 423). Required for per-game resources.
        #[clap(long, short)]
        game_key: Option<GameKey>,

        /// Fetch from the current game of `--code` (saved as `current-game-<resource>`).
        #[clap(long, conflicts_with = "game_key")]
        current: bool,

        /// Per-game resource to fetch.
        #[clap(long, short, value_enum, default_value_t = GameResource::Info)]
        resource: GameResource,

        /// Save into this season's sub-directory.
        #[clap(long, short)]
        season: Option<Season>,
    },

    /// Save the contents of a JSON file under a key.
    Import {
        key: String,

        /// JSON file to import.
        #[clap(long, short)]
        file: PathBuf,

        #[clap(flatten)]
        dir: DirArgs,
    },

    /// Load a saved record and print it.
    Show {
        key: String,

        /// Validate the record as this model before printing.
        #[clap(long, short, value_enum)]
        model: Option<ModelKind>,

        #[clap(flatten)]
        dir: DirArgs,
    },

    /// List saved record keys.
    List {
        #[clap(flatten)]
        dir: DirArgs,
    },

    /// Delete a saved record.
    Remove {
        key: String,

        #[clap(flatten)]
        dir: DirArgs,
    },

    /// Print where a record is stored.
    Path {
        key: String,

        #[clap(flatten)]
        dir: DirArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "yahoo-ffl", about = "Yahoo Fantasy Sports data CLI")]
pub struct Yahoo {
    /// Base data directory (or set `YAHOO_FFL_DATA_DIR` env var).
    #[clap(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Save, load and inspect Yahoo Fantasy data
    Data {
        #[clap(subcommand)]
        cmd: DataCmd,
    },
}
