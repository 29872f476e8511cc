//! Read-only view of the simulation handed to the rendering collaborator.

use serde::{Serialize, Deserialize};

use crate::game::entities::{Enemy, EnemyKind, Player, PumpState, Rock, RockState};
use crate::game::grid::Grid;
use crate::game::types::{Archetype, Cell, EnemyId, Position, TerminalStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RockView {
    pub pos: Position,
    pub state: RockState,
    pub wobble_remaining: u32,
    pub fall_progress: u32,
}

impl From<&Rock> for RockView {
    fn from(rock: &Rock) -> Self {
        Self {
            pos: rock.pos,
            state: rock.state(),
            wobble_remaining: rock.wobble_remaining(),
            fall_progress: rock.fall_progress(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub pos: Position,
    pub archetype: Archetype,
    pub inflation: u32,
    /// Ghost state for Pookas, breath state for Fygars.
    pub kind: EnemyKind,
}

impl From<&Enemy> for EnemyView {
    fn from(enemy: &Enemy) -> Self {
        Self {
            id: enemy.id,
            pos: enemy.pos,
            archetype: enemy.archetype(),
            inflation: enemy.inflation(),
            kind: enemy.kind().clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Position,
    pub pump: PumpState,
    pub is_alive: bool,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self { pos: player.pos, pump: player.pump(), is_alive: player.is_alive() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub score: u32,
    pub status: TerminalStatus,
    pub width: usize,
    pub height: usize,
    /// Rows of cells, indexed `[y][x]`.
    pub cells: Vec<Vec<Cell>>,
    pub rocks: Vec<RockView>,
    pub enemies: Vec<EnemyView>,
    pub player: PlayerView,
}

impl Snapshot {
    pub fn capture(
        tick: u64,
        score: u32,
        status: TerminalStatus,
        grid: &Grid,
        player: &Player,
        enemies: &[Enemy],
    ) -> Self {
        Self {
            tick,
            score,
            status,
            width: grid.width(),
            height: grid.height(),
            cells: grid.cells().to_vec(),
            rocks: grid.rocks().iter().map(RockView::from).collect(),
            enemies: enemies.iter().filter(|e| e.is_alive()).map(EnemyView::from).collect(),
            player: PlayerView::from(player),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
