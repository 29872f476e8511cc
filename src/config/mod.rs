//! Main configuration module.
//!
//! Re-exports submodules for default constants, level parameters and level layouts.
pub mod game;
pub mod layout;
pub mod level;

pub use layout::{EnemySpawn, LevelLayout};
pub use level::{
    FygarParams, InflationParams, LevelParams, PookaParams, PumpParams, RockParams, ScoreTable,
};
