//! `data` subcommand handlers: fetch, import, show, list, remove, path.

use serde_json::Value;
use std::{fs, path::Path};
use tracing::warn;

use super::prettify_data;
use crate::{
    cli::types::ModelKind,
    storage::YahooData,
    yahoo::{
        current_game_key, game_keys_key, game_resource_key, season_dir, Game, GameCode,
        GameKey, GameResource, GameWeek, PositionType, RosterPosition, Season, StatCategories,
        YahooClient,
    },
    Result, YahooError,
};

/// What `fetch` queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchTarget {
    /// Every game of the sport, saved as `{code}-game_keys`.
    AllGames,
    /// A resource of the sport's current game, saved as `current-game-{resource}`.
    CurrentGame,
    /// A resource of one game, saved as `{game_key}-game-{resource}`.
    Game(GameKey),
}

impl FetchTarget {
    pub fn from_args(game_key: Option<GameKey>, current: bool) -> Self {
        match (game_key, current) {
            (Some(game_key), _) => FetchTarget::Game(game_key),
            (None, true) => FetchTarget::CurrentGame,
            (None, false) => FetchTarget::AllGames,
        }
    }
}

/// Query the API and save the result. Returns the key it was saved under.
///
/// The record goes in the season sub-directory when `season` is given,
/// otherwise in the data directory.
pub async fn handle_fetch(
    data: &YahooData,
    client: &YahooClient,
    code: GameCode,
    target: FetchTarget,
    resource: GameResource,
    season: Option<Season>,
) -> Result<String> {
    let dir = season.map(|s| season_dir(data.data_dir(), s));

    let key = match &target {
        FetchTarget::AllGames => {
            let key = game_keys_key(code);
            println!("Fetching all {} games from Yahoo...", code);
            data.save_async(&key, || client.get_games(code), dir.as_deref())
                .await?;
            key
        }
        FetchTarget::CurrentGame => {
            let key = current_game_key(resource);
            println!("Fetching current {} game {}...", code, resource.key_suffix());
            data.save_async(
                &key,
                || client.get_current_game(code, resource),
                dir.as_deref(),
            )
            .await?;
            key
        }
        FetchTarget::Game(game_key) => {
            let key = game_resource_key(game_key, resource);
            println!("Fetching game {} {}...", game_key, resource.key_suffix());
            data.save_async(
                &key,
                || client.get_game_resource(game_key, resource),
                dir.as_deref(),
            )
            .await?;
            key
        }
    };

    let path = data.location(&key, dir.as_deref())?;
    println!("✓ Saved {} to {}", key, path.display());
    Ok(key)
}

/// Save the contents of a JSON file under `key`.
pub fn handle_import(
    data: &YahooData,
    key: &str,
    file: &Path,
    new_data_dir: Option<&Path>,
) -> Result<Value> {
    let value = data.save(
        key,
        || -> Result<Value> {
            let contents = fs::read_to_string(file)?;
            Ok(serde_json::from_str(&contents)?)
        },
        new_data_dir,
    )?;

    println!(
        "✓ Imported {} as {}",
        file.display(),
        data.location(key, new_data_dir)?.display()
    );
    Ok(value)
}

/// Load a record, optionally validating it as a model, and render it.
pub fn render_record(
    data: &YahooData,
    key: &str,
    model: Option<ModelKind>,
    new_data_dir: Option<&Path>,
) -> Result<String> {
    match model {
        None => prettify_data(&data.load(key, new_data_dir)?),
        Some(ModelKind::Game) => prettify_data(&data.load_as::<Game>(key, new_data_dir)?),
        Some(ModelKind::Games) => prettify_data(&data.load_as::<Vec<Game>>(key, new_data_dir)?),
        Some(ModelKind::GameWeeks) => {
            prettify_data(&data.load_as::<Vec<GameWeek>>(key, new_data_dir)?)
        }
        Some(ModelKind::StatCategories) => {
            prettify_data(&data.load_as::<StatCategories>(key, new_data_dir)?)
        }
        Some(ModelKind::PositionTypes) => {
            prettify_data(&data.load_as::<Vec<PositionType>>(key, new_data_dir)?)
        }
        Some(ModelKind::RosterPositions) => {
            prettify_data(&data.load_as::<Vec<RosterPosition>>(key, new_data_dir)?)
        }
    }
}

pub fn handle_show(
    data: &YahooData,
    key: &str,
    model: Option<ModelKind>,
    new_data_dir: Option<&Path>,
) -> Result<()> {
    match render_record(data, key, model, new_data_dir) {
        Ok(rendered) => {
            println!("{}", rendered);
            Ok(())
        }
        Err(e @ YahooError::NotFound { .. }) => {
            warn!(key, "no saved data; fetch or import it first");
            Err(e)
        }
        Err(e) => Err(e),
    }
}

pub fn handle_list(data: &YahooData, new_data_dir: Option<&Path>) -> Result<Vec<String>> {
    let keys = data.list_keys(new_data_dir)?;
    let dir = new_data_dir.unwrap_or(data.data_dir());

    if keys.is_empty() {
        println!("No saved data in {}", dir.display());
    } else {
        println!("{} saved record(s) in {}:", keys.len(), dir.display());
        for key in &keys {
            println!("  {}", key);
        }
    }
    Ok(keys)
}

pub fn handle_remove(data: &YahooData, key: &str, new_data_dir: Option<&Path>) -> Result<bool> {
    let removed = data.remove(key, new_data_dir)?;
    if removed {
        println!("✓ Removed {}", key);
    } else {
        println!("Nothing saved under {}", key);
    }
    Ok(removed)
}

pub fn handle_path(data: &YahooData, key: &str, new_data_dir: Option<&Path>) -> Result<()> {
    println!("{}", data.location(key, new_data_dir)?.display());
    Ok(())
}
