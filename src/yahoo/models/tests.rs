//! Unit tests for Yahoo game models

use super::*;
use crate::storage::{FromStructuredData, ModelData};
use crate::YahooError;
use serde_json::json;

#[cfg(test)]
mod models_tests {
    use super::*;

    fn game_json() -> serde_json::Value {
        json!({
            "game_key": "423",
            "game_id": 423,
            "name": "Football",
            "code": "nfl",
            "type": "full",
            "url": "https://football.fantasysports.yahoo.com/f1",
            "season": 2023,
            "is_registration_over": 1,
            "is_game_over": 1,
            "is_offseason": 0,
            "current_week": 17
        })
    }

    #[test]
    fn test_game_deserialization() {
        let game = Game::from_structured_data(game_json()).unwrap();

        assert_eq!(game.game_key, "423");
        assert_eq!(game.game_id, 423);
        assert_eq!(game.code, "nfl");
        assert_eq!(game.season, 2023);
        assert_eq!(game.game_type.as_deref(), Some("full"));
        assert!(game.is_over());
        assert!(!game.in_offseason());
        assert!(game.game_weeks.is_none());
    }

    #[test]
    fn test_game_serialization_round_trip() {
        let game = Game::from_structured_data(game_json()).unwrap();
        let value = serde_json::to_value(&game).unwrap();

        assert_eq!(value, game_json());
        assert_eq!(Game::from_structured_data(value).unwrap(), game);
    }

    #[test]
    fn test_game_absent_options_not_serialized() {
        let game = Game::from_structured_data(json!({
            "game_key": "414",
            "game_id": 414,
            "name": "Football",
            "code": "nfl",
            "season": 2022
        }))
        .unwrap();

        let value = serde_json::to_value(&game).unwrap();
        assert!(value.get("url").is_none());
        assert!(value.get("type").is_none());
    }

    #[test]
    fn test_game_missing_required_field() {
        let mut value = game_json();
        value.as_object_mut().unwrap().remove("code");

        match Game::from_structured_data(value) {
            Err(YahooError::ModelConstruction { model, field, .. }) => {
                assert_eq!(model, "Game");
                assert_eq!(field, "code");
            }
            other => panic!("Expected ModelConstruction, got {:?}", other),
        }
    }

    #[test]
    fn test_game_rejects_unknown_field() {
        let mut value = game_json();
        value["surprise"] = json!("field");

        match Game::from_structured_data(value) {
            Err(YahooError::ModelConstruction { field, .. }) => assert_eq!(field, "surprise"),
            other => panic!("Expected ModelConstruction, got {:?}", other),
        }
    }

    fn construction_field<M>(value: serde_json::Value) -> String
    where
        M: FromStructuredData + std::fmt::Debug,
    {
        match M::from_structured_data(value) {
            Err(YahooError::ModelConstruction { field, .. }) => field,
            other => panic!("Expected ModelConstruction, got {:?}", other),
        }
    }

    #[test]
    fn test_game_accepts_string_numbers() {
        let game = Game::from_structured_data(json!({
            "game_key": "423",
            "game_id": "423",
            "name": "Football",
            "code": "nfl",
            "season": "2023",
            "is_game_over": "0",
            "current_week": "17",
            "picks_status": "",
            "alternate_start_deadline": "0"
        }))
        .unwrap();

        assert_eq!(game.game_id, 423);
        assert_eq!(game.season, 2023);
        assert_eq!(game.current_week, Some(17));
        assert!(!game.is_over());

        let value = serde_json::to_value(&game).unwrap();
        assert_eq!(value["game_id"], 423);
        assert_eq!(Game::from_structured_data(value).unwrap(), game);
    }

    #[test]
    fn test_game_null_optional_number() {
        let mut value = game_json();
        value["current_week"] = json!(null);
        value["contest_group_id"] = json!("");
        let game = Game::from_structured_data(value).unwrap();
        assert!(game.current_week.is_none());
        assert!(game.contest_group_id.is_none());
    }

    #[test]
    fn test_game_type_mismatch_names_field() {
        let mut value = game_json();
        value["game_id"] = json!("not-a-number");
        assert_eq!(construction_field::<Game>(value), "game_id");

        let mut value = game_json();
        value["name"] = json!(7);
        assert_eq!(construction_field::<Game>(value), "name");
    }

    #[test]
    fn test_game_out_of_range_number_names_field() {
        let mut value = game_json();
        value["is_game_over"] = json!(300);
        assert_eq!(construction_field::<Game>(value), "is_game_over");
    }

    #[test]
    fn test_game_bad_nested_date_names_path() {
        let mut value = game_json();
        value["game_weeks"] = json!([
            {"week": 1, "start": "2023-13-01", "end": "2023-09-11"}
        ]);
        assert_eq!(construction_field::<Game>(value), "game_weeks[0].start");
    }

    #[test]
    fn test_stat_categories_nested_missing_field_names_path() {
        let value = json!({"stats": [{"stat_id": 1}, {"name": "x"}]});
        assert_eq!(
            construction_field::<StatCategories>(value),
            "stats[1].stat_id"
        );
    }

    #[test]
    fn test_stat_categories_nested_unknown_field_names_path() {
        let value = json!({
            "stats": [
                {"stat_id": 4, "stat_position_types": [{"position_type": "O", "extra": 1}]}
            ]
        });
        assert_eq!(
            construction_field::<StatCategories>(value),
            "stats[0].stat_position_types[0].extra"
        );
    }

    #[test]
    fn test_sequence_of_games_names_index_and_field() {
        let value = json!([game_json(), {"game_key": "399"}]);
        assert_eq!(construction_field::<Vec<Game>>(value), "[1].game_id");
    }

    #[test]
    fn test_game_with_nested_resources() {
        let mut value = game_json();
        value["game_weeks"] = json!([
            {"week": 1, "start": "2023-09-07", "end": "2023-09-11", "display_name": "1"}
        ]);
        value["position_types"] = json!([
            {"type": "O", "display_name": "Offense"},
            {"type": "K", "display_name": "Kickers"}
        ]);
        value["roster_positions"] = json!([
            {"position": "QB", "position_type": "O", "count": 1, "is_starting_position": 1},
            {"position": "BN", "count": 6, "is_starting_position": 0}
        ]);

        let game = Game::from_structured_data(value.clone()).unwrap();
        let weeks = game.game_weeks.as_ref().unwrap();
        assert_eq!(weeks[0].start, NaiveDate::from_ymd_opt(2023, 9, 7).unwrap());
        assert_eq!(game.position_types.as_ref().unwrap()[1].position_type, "K");
        let roster = game.roster_positions.as_ref().unwrap();
        assert!(roster[0].is_starting());
        assert!(!roster[1].is_starting());

        assert_eq!(serde_json::to_value(&game).unwrap(), value);
    }

    #[test]
    fn test_game_week_contains() {
        let week = GameWeek::from_structured_data(json!({
            "week": 2,
            "start": "2023-09-12",
            "end": "2023-09-18"
        }))
        .unwrap();

        assert!(week.contains(NaiveDate::from_ymd_opt(2023, 9, 12).unwrap()));
        assert!(week.contains(NaiveDate::from_ymd_opt(2023, 9, 18).unwrap()));
        assert!(!week.contains(NaiveDate::from_ymd_opt(2023, 9, 19).unwrap()));
    }

    #[test]
    fn test_game_week_bad_date() {
        let result = GameWeek::from_structured_data(json!({
            "week": 1,
            "start": "September 7",
            "end": "2023-09-11"
        }));
        match result {
            Err(YahooError::ModelConstruction { model, field, .. }) => {
                assert_eq!(model, "GameWeek");
                assert_eq!(field, "start");
            }
            other => panic!("Expected ModelConstruction, got {:?}", other),
        }
    }

    #[test]
    fn test_stat_categories_find() {
        let categories = StatCategories::from_structured_data(json!({
            "stats": [
                {
                    "stat_id": 4,
                    "enabled": 1,
                    "name": "Passing Yards",
                    "display_name": "Pass Yds",
                    "sort_order": 1,
                    "position_type": "O",
                    "stat_position_types": [
                        {"position_type": "O"}
                    ]
                },
                {
                    "stat_id": 5,
                    "name": "Passing Touchdowns",
                    "display_name": "Pass TD"
                }
            ]
        }))
        .unwrap();

        assert_eq!(categories.stats.len(), 2);
        assert_eq!(
            categories.find(4).unwrap().display_name.as_deref(),
            Some("Pass Yds")
        );
        assert!(categories.find(99).is_none());
    }

    #[test]
    fn test_stat_categories_requires_stats() {
        match StatCategories::from_structured_data(json!({})) {
            Err(YahooError::ModelConstruction { model, field, .. }) => {
                assert_eq!(model, "StatCategories");
                assert_eq!(field, "stats");
            }
            other => panic!("Expected ModelConstruction, got {:?}", other),
        }
    }

    #[test]
    fn test_game_keys_as_model_data() {
        let games = ModelData::<Game>::from_structured_data(json!([
            {"game_key": "390", "game_id": 390, "name": "Football", "code": "nfl", "season": 2019},
            {"game_key": "399", "game_id": 399, "name": "Football", "code": "nfl", "season": 2020}
        ]))
        .unwrap();

        let games = games.into_vec();
        assert_eq!(games.len(), 2);
        assert_eq!(games[1].season, 2020);
    }

    #[test]
    fn test_position_type_uses_type_key() {
        let position_type = PositionType {
            position_type: "DT".to_string(),
            display_name: "Defense/Special Teams".to_string(),
        };

        let value = serde_json::to_value(&position_type).unwrap();
        assert_eq!(value["type"], "DT");
        assert!(value.get("position_type").is_none());
    }
}
