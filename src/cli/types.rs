//! Value enums for CLI arguments.

use std::fmt;

/// Typed model a saved record can be validated against when shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModelKind {
    Game,
    Games,
    GameWeeks,
    StatCategories,
    PositionTypes,
    RosterPositions,
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Game => write!(f, "game"),
            ModelKind::Games => write!(f, "games"),
            ModelKind::GameWeeks => write!(f, "game-weeks"),
            ModelKind::StatCategories => write!(f, "stat-categories"),
            ModelKind::PositionTypes => write!(f, "position-types"),
            ModelKind::RosterPositions => write!(f, "roster-positions"),
        }
    }
}
