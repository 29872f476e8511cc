//! Rock physics: loosening, falling, crushing and landing.

use log::debug;

use crate::game::entities::CrushVictim;
use crate::game::entities::RockStep;
use crate::game::entities::RockState;
use crate::game::events::{DeathCause, GameEvent};
use crate::game::grid::Grid;
use crate::game::state::GameState;
use crate::game::systems::rules::kill_player;
use crate::game::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Support {
    Open,
    Solid,
    /// A falling rock that may still clear the way.
    FallingRock,
}

fn support_below(grid: &Grid, pos: Position) -> Support {
    let below = pos.below();
    if grid.has_solid_ground(below) || grid.has_resting_rock(below) {
        Support::Solid
    } else if grid.is_occupied_by_rock(below) {
        Support::FallingRock
    } else {
        Support::Open
    }
}

pub fn update_rocks(game_state: &mut GameState) {
    let rock_params = game_state.params.rock;
    let triggered = trigger_unsupported_rocks(game_state, rock_params.wobble_duration);

    for index in 0..game_state.grid.rocks().len() {
        // A rock loosened this tick starts counting on the next one.
        if triggered.contains(&index) {
            continue;
        }
        let rock = &mut game_state.grid.rocks_mut()[index];
        match rock.update(rock_params.fall_ticks_per_cell) {
            RockStep::Idle => {}
            RockStep::StartedFalling => {
                let pos = rock.pos;
                debug!("[Physics] Rock falling pos={}", pos);
                game_state.events.push(GameEvent::RockFalling { pos });
            }
            RockStep::ReadyToDrop => advance_falling_rock(game_state, index),
        }
    }
}

/// Stable rocks with an open tunnel beneath start wobbling. Returns their indices.
fn trigger_unsupported_rocks(game_state: &mut GameState, wobble_duration: u32) -> Vec<usize> {
    let grid = &game_state.grid;
    let loosened: Vec<usize> = grid
        .rocks()
        .iter()
        .enumerate()
        .filter(|(_, rock)| rock.state() == RockState::Stable && support_below(grid, rock.pos) == Support::Open)
        .map(|(index, _)| index)
        .collect();

    for &index in &loosened {
        let rock = &mut game_state.grid.rocks_mut()[index];
        rock.trigger(wobble_duration);
        let pos = rock.pos;
        let falling = rock.state() == RockState::Falling;
        debug!("[Physics] Rock wobbling pos={} ticks={}", pos, wobble_duration);
        game_state.events.push(GameEvent::RockWobbling { pos });
        if falling {
            game_state.events.push(GameEvent::RockFalling { pos });
        }
    }
    loosened
}

fn advance_falling_rock(game_state: &mut GameState, index: usize) {
    let pos = game_state.grid.rocks()[index].pos;
    match support_below(&game_state.grid, pos) {
        Support::Solid => {
            land_rock(game_state, index);
            return;
        }
        Support::FallingRock => return,
        Support::Open => {}
    }

    let below = pos.below();
    crush_occupants(game_state, index, below);
    game_state.grid.dig(pos);
    game_state.grid.rocks_mut()[index].drop_one();

    if support_below(&game_state.grid, below) == Support::Solid {
        land_rock(game_state, index);
    }
}

/// Everything standing in `cell` as the rock enters it is crushed, each victim at
/// most once per fall.
fn crush_occupants(game_state: &mut GameState, index: usize, cell: Position) {
    let score = game_state.params.score;
    let rock = &mut game_state.grid.rocks_mut()[index];

    let player_crushed = game_state.player.is_alive()
        && game_state.player.pos == cell
        && rock.record_crush(CrushVictim::Player);

    for enemy in game_state.enemies.iter_mut().filter(|e| e.is_alive() && e.pos == cell) {
        if !rock.record_crush(CrushVictim::Enemy(enemy.id)) {
            continue;
        }
        enemy.kill();
        game_state.score = game_state.score.saturating_add(score.rock_kill);
        debug!("[Physics] Rock crushed enemy={} pos={}", enemy.id, cell);
        game_state.events.push(GameEvent::EnemyCrushed { enemy: enemy.id, pos: cell, points: score.rock_kill });

        if rock.enemies_crushed() == 2 {
            game_state.score = game_state.score.saturating_add(score.rock_multi_kill);
            game_state.events.push(GameEvent::MultiKill { points: score.rock_multi_kill });
        }
    }

    if player_crushed {
        kill_player(game_state, DeathCause::Crushed);
    }
}

fn land_rock(game_state: &mut GameState, index: usize) {
    let rock = &mut game_state.grid.rocks_mut()[index];
    rock.land();
    let (pos, crushed) = (rock.pos, rock.crushed().len());
    debug!("[Physics] Rock landed pos={} fell={} crushed={}", pos, rock.cells_fallen(), crushed);
    game_state.events.push(GameEvent::RockLanded { pos, crushed });
}
