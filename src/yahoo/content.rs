//! Flattening of Yahoo API responses into the mapping form of the models.
//!
//! Yahoo wraps every body in `fantasy_content`, encodes collections as
//! `{"0": {...}, "1": {...}, "count": 2}`, wraps each item in a single-key
//! mapping (`{"game_week": {...}}`) and splits a resource that carries
//! sub-resources into a sequence of parts
//! (`"game": [{"game_key": ...}, {"game_weeks": ...}]`).

use serde_json::{Map, Value};

use crate::{yahoo::records::GameResource, Result, YahooError};

/// Single-key mappings that only wrap one item of a collection.
const ITEM_WRAPPERS: &[&str] = &[
    "game",
    "game_week",
    "stat",
    "stat_position_type",
    "position_type",
    "roster_position",
    "group",
];

/// Every game listed in a `games` response, in response order.
pub fn games_from_response(body: Value) -> Result<Value> {
    let games = take_content(body, "games")?;
    match normalize(games) {
        games @ Value::Array(_) => Ok(games),
        _ => Err(unexpected("games collection")),
    }
}

/// The game of a `game/{key}` response, with its sub-resources merged in.
pub fn game_from_response(body: Value) -> Result<Value> {
    let game = take_content(body, "game")?;
    match normalize_item("game", game) {
        game @ Value::Object(_) => Ok(game),
        _ => Err(unexpected("game")),
    }
}

/// The requested resource of a game response: the game itself for info and
/// metadata, otherwise the sub-resource the response carries.
pub fn game_resource_from_response(body: Value, resource: GameResource) -> Result<Value> {
    let game = game_from_response(body)?;
    match resource.game_field() {
        None => Ok(game),
        Some(field) => match game {
            Value::Object(mut fields) => fields.remove(field).ok_or_else(|| unexpected(field)),
            _ => Err(unexpected("game")),
        },
    }
}

fn take_content(body: Value, field: &str) -> Result<Value> {
    match body {
        Value::Object(mut root) => match root.remove("fantasy_content") {
            Some(Value::Object(mut content)) => {
                content.remove(field).ok_or_else(|| unexpected(field))
            }
            _ => Err(unexpected("fantasy_content")),
        },
        _ => Err(unexpected("fantasy_content")),
    }
}

fn unexpected(expected: &str) -> YahooError {
    YahooError::UnexpectedResponse {
        expected: expected.to_string(),
    }
}

/// Recursively collapse collections and item wrappers.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) if is_collection(&map) => Value::Array(collection_items(map)),
        Value::Object(mut map) => {
            if let Some(key) = wrapped_item_key(&map) {
                let inner = map.remove(&key).unwrap_or(Value::Null);
                return normalize_item(&key, inner);
            }
            Value::Object(map.into_iter().map(|(k, v)| (k, normalize(v))).collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize).collect()),
        other => other,
    }
}

fn normalize_item(key: &str, inner: Value) -> Value {
    match inner {
        // Only a game is split into parts; other wrapped sequences are lists.
        Value::Array(parts) if key == "game" => {
            let mut merged = Map::new();
            for part in parts {
                if let Value::Object(fields) = normalize(part) {
                    merged.extend(fields);
                }
            }
            Value::Object(merged)
        }
        other => normalize(other),
    }
}

fn wrapped_item_key(map: &Map<String, Value>) -> Option<String> {
    if map.len() != 1 {
        return None;
    }
    let (key, inner) = map.iter().next()?;
    let wraps_item =
        ITEM_WRAPPERS.contains(&key.as_str()) && (inner.is_object() || inner.is_array());
    wraps_item.then(|| key.clone())
}

fn is_collection(map: &Map<String, Value>) -> bool {
    map.contains_key("count")
        && map
            .keys()
            .all(|k| k == "count" || k.parse::<usize>().is_ok())
}

fn collection_items(map: Map<String, Value>) -> Vec<Value> {
    let mut items: Vec<(usize, Value)> = map
        .into_iter()
        .filter_map(|(k, v)| k.parse::<usize>().ok().map(|i| (i, v)))
        .collect();
    items.sort_by_key(|(i, _)| *i);
    items.into_iter().map(|(_, v)| normalize(v)).collect()
}
