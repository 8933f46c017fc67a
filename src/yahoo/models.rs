//! Typed models for Yahoo Fantasy game resources.
//!
//! Models are strict: unknown fields are rejected and required fields must be
//! present. Optional fields that were absent stay absent when the model is
//! serialized again, so a model saved and reloaded compares equal to itself.
//!
//! Yahoo sends most numbers as strings (`"game_id": "423"`); numeric fields
//! accept either form and are saved back as numbers.

use chrono::NaiveDate;
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{fmt::Display, str::FromStr};

use crate::structured_model;

#[cfg(test)]
mod tests;

fn parse_number<T, E>(value: Value) -> Result<T, E>
where
    T: FromStr + serde::de::DeserializeOwned,
    T::Err: Display,
    E: Error,
{
    match value {
        Value::String(s) => s.trim().parse().map_err(E::custom),
        other => T::deserialize(other).map_err(E::custom),
    }
}

fn de_num<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + serde::de::DeserializeOwned,
    T::Err: Display,
{
    parse_number(Value::deserialize(deserializer)?)
}

fn de_opt_num<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + serde::de::DeserializeOwned,
    T::Err: Display,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => parse_number(value).map(Some),
    }
}

/// A fantasy game (one sport, one season), e.g. NFL 2023 with key `423`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Game {
    pub game_key: String,
    #[serde(deserialize_with = "de_num")]
    pub game_id: u32,
    pub name: String,
    pub code: String,
    #[serde(deserialize_with = "de_num")]
    pub season: u16,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub game_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_registration_over: Option<u8>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_game_over: Option<u8>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_offseason: Option<u8>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_live_draft_lobby_active: Option<u8>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub editorial_season: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picks_status: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub scenario_generator: Option<u8>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub contest_group_id: Option<u32>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_schedule: Option<u8>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_week: Option<u16>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_contest_registration_active: Option<u8>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_contest_over: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_start_deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_weeks: Option<Vec<GameWeek>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_categories: Option<StatCategories>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_types: Option<Vec<PositionType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roster_positions: Option<Vec<RosterPosition>>,
}

impl Game {
    pub fn is_over(&self) -> bool {
        self.is_game_over == Some(1)
    }

    pub fn in_offseason(&self) -> bool {
        self.is_offseason == Some(1)
    }
}

/// A scoring week with its calendar bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GameWeek {
    #[serde(deserialize_with = "de_num")]
    pub week: u16,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl GameWeek {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Stat categories of a game or league.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StatCategories {
    pub stats: Vec<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<StatGroup>>,
}

impl StatCategories {
    pub fn find(&self, stat_id: u32) -> Option<&Stat> {
        self.stats.iter().find(|s| s.stat_id == stat_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    #[serde(deserialize_with = "de_num")]
    pub stat_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub sort_order: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub enabled: Option<u8>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_only_display_stat: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_position_types: Option<Vec<StatPositionType>>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_excluded_from_display: Option<u8>,
}

/// Display grouping of stats, e.g. `passing`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StatGroup {
    pub group_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_abbr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StatPositionType {
    pub position_type: String,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_only_display_stat: Option<u8>,
}

/// Position group, e.g. `O` (offense) or `K` (kickers).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PositionType {
    #[serde(rename = "type")]
    pub position_type: String,
    pub display_name: String,
}

/// A roster slot and how many of it a team has.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RosterPosition {
    pub position: String,
    #[serde(deserialize_with = "de_num")]
    pub count: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_opt_num",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_starting_position: Option<u8>,
}

impl RosterPosition {
    pub fn is_starting(&self) -> bool {
        self.is_starting_position == Some(1)
    }
}

structured_model! {
    Game => "Game",
    GameWeek => "GameWeek",
    StatCategories => "StatCategories",
    Stat => "Stat",
    StatPositionType => "StatPositionType",
    StatGroup => "StatGroup",
    PositionType => "PositionType",
    RosterPosition => "RosterPosition",
}
