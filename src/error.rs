//! Errors raised while building a level.
//!
//! The simulation itself never fails: invalid intents are ignored and out-of-bounds
//! queries answer deterministically. Only level parameters are validated.

use thiserror::Error;

use crate::game::types::Position;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("layout row {row} has length {found}, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("unknown layout glyph '{glyph}' at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },

    #[error("layout has no player spawn")]
    MissingPlayer,

    #[error("layout has a second player spawn at {0}")]
    DuplicatePlayer(Position),

    #[error("{what} at {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        what: &'static str,
        pos: Position,
        width: usize,
        height: usize,
    },

    #[error("grid {width}x{height} exceeds the {max} cell side limit")]
    GridTooLarge { width: usize, height: usize, max: usize },

    #[error("rock at {0} sits in a tunnel")]
    RockInTunnel(Position),

    #[error("{what} at {pos} spawns in soil")]
    SpawnInSoil { what: &'static str, pos: Position },

    #[error("{0} must be greater than zero")]
    ZeroParameter(&'static str),

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("{name} is {value}, longer than the {max} cell grid side")]
    RangeTooLong { name: &'static str, value: u32, max: usize },

    #[error("failed to parse level parameters: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read level parameters: {0}")]
    Io(#[from] std::io::Error),
}
