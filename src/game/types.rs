use std::fmt;

use serde::{Serialize, Deserialize};

/// Grid coordinate as (column, row). Row 0 is the surface; rows grow downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        self.offset(direction, 1)
    }

    /// The cell `distance` cells away in `direction`. Clamps at the `i32` limits.
    pub fn offset(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(
            self.x.saturating_add(dx.saturating_mul(distance)),
            self.y.saturating_add(dy.saturating_mul(distance)),
        )
    }

    pub fn below(self) -> Self {
        self.step(Direction::Down)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Terrain of a single grid cell. Soil only ever becomes tunnel, never the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Soil,
    Tunnel,
}

/// A discrete request from the input collaborator, consumed once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Move(Direction),
    StartPump(Direction),
}

/// Outcome of a tick as seen by the outer game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalStatus {
    Running,
    LevelCleared,
    PlayerDead,
}

impl TerminalStatus {
    pub fn is_terminal(self) -> bool {
        self != TerminalStatus::Running
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Pooka,
    Fygar,
}

/// Stable identifier of an enemy for the lifetime of a level.
pub type EnemyId = u32;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_clamps_instead_of_overflowing() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.offset(Direction::Right, 3), Position::new(4, 1));
        assert_eq!(pos.offset(Direction::Right, i32::MAX), Position::new(i32::MAX, 1));
        assert_eq!(pos.offset(Direction::Up, i32::MAX), Position::new(1, i32::MIN + 2));
    }
}
