//! Events emitted during a simulation tick.
//! The presentation layer consumes these for animation and sound.

use serde::{Serialize, Deserialize};

use crate::game::types::{Direction, EnemyId, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Crushed,
    Burned,
    Caught,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Dug { pos: Position, points: u32 },
    PumpFired { direction: Direction },
    PumpHit { enemy: EnemyId, inflation: u32 },
    PumpKill { enemy: EnemyId, points: u32 },
    GhostStarted { enemy: EnemyId },
    GhostEnded { enemy: EnemyId },
    BreathStarted { enemy: EnemyId, cells: Vec<Position> },
    RockWobbling { pos: Position },
    RockFalling { pos: Position },
    RockLanded { pos: Position, crushed: usize },
    EnemyCrushed { enemy: EnemyId, pos: Position, points: u32 },
    MultiKill { points: u32 },
    PlayerKilled { cause: DeathCause },
    LevelCleared { bonus: u32 },
}
