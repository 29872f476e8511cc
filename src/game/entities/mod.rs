//! Game entities module.
//!
//! This module organizes player, enemy and rock entity logic.

pub mod enemy;
pub mod player;
pub mod rock;

pub use enemy::*;
pub use player::*;
pub use rock::*;
