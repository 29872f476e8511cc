//! Combat and win/lose rules: pump hits, enemy behavior, fire breath, contact and
//! terminal status.

use log::{debug, info};

use crate::config::{FygarParams, PookaParams};
use crate::game::entities::{Enemy, InflateOutcome, PumpState};
use crate::game::events::{DeathCause, GameEvent};
use crate::game::state::GameState;
use crate::game::systems::movement::move_enemy;
use crate::game::systems::policy::breath_line;
use crate::game::types::{Archetype, Direction, Position, TerminalStatus};

/// Resolve the active pump against enemies, then count it down.
pub fn resolve_pump(game_state: &mut GameState) {
    if let PumpState::Active { direction, origin, hit: None, .. } = game_state.player.pump() {
        strike_first_enemy(game_state, origin, direction);
    }
    game_state.player.update_pump();
}

/// An activation inflates the nearest enemy on its wire once. The wire is laid from
/// the firing cell and stops at soil and rocks.
fn strike_first_enemy(game_state: &mut GameState, origin: Position, direction: Direction) {
    let range = game_state.params.pump.range as i32;
    let inflation = game_state.params.inflation;
    let pump_kill = game_state.params.score.pump_kill;

    for distance in 1..=range {
        let cell = origin.offset(direction, distance);
        if !game_state.grid.is_tunnel(cell) || game_state.grid.is_occupied_by_rock(cell) {
            return;
        }
        let Some(enemy) = game_state.enemies.iter_mut().find(|e| e.is_alive() && e.pos == cell) else {
            continue;
        };
        let id = enemy.id;
        let outcome = enemy.inflate(inflation.required, inflation.decay_ticks);
        game_state.player.record_pump_hit(cell);

        match outcome {
            InflateOutcome::Inflated(level) => {
                debug!("[Rules] Pump hit enemy={} inflation={}", id, level);
                game_state.events.push(GameEvent::PumpHit { enemy: id, inflation: level });
            }
            InflateOutcome::Popped => {
                debug!("[Rules] Pump popped enemy={} points={}", id, pump_kill);
                game_state.score = game_state.score.saturating_add(pump_kill);
                game_state.events.push(GameEvent::PumpHit { enemy: id, inflation: inflation.required });
                game_state.events.push(GameEvent::PumpKill { enemy: id, points: pump_kill });
            }
            InflateOutcome::Ignored => {}
        }
        return;
    }
}

/// Per enemy: movement cadence, inflation decay, then archetype behavior.
pub fn update_enemies(game_state: &mut GameState) {
    let decay_ticks = game_state.params.inflation.decay_ticks;
    let pooka = game_state.params.pooka;
    let fygar = game_state.params.fygar;
    let target = game_state.player.pos;

    for index in 0..game_state.enemies.len() {
        let enemy = &mut game_state.enemies[index];
        if !enemy.is_alive() {
            continue;
        }
        if enemy.advance_move_counter() && !enemy.is_breathing() {
            move_enemy(&game_state.grid, enemy, target);
        }
        enemy.decay_inflation(decay_ticks);

        match enemy.archetype() {
            Archetype::Pooka => update_pooka(game_state, index, pooka),
            Archetype::Fygar => update_fygar(game_state, index, fygar),
        }
    }

    resolve_breath(game_state);
}

fn update_pooka(game_state: &mut GameState, index: usize, pooka: PookaParams) {
    let id = game_state.enemies[index].id;
    if game_state.enemies[index].tick_ghost() {
        debug!("[Rules] Ghost ended enemy={}", id);
        game_state.events.push(GameEvent::GhostEnded { enemy: id });
    }

    let enemy = &game_state.enemies[index];
    if enemy.is_ghost() || enemy.inflation() > 0 {
        return;
    }
    if game_state.policy.should_ghost(enemy, &game_state.grid, &game_state.player)
        && game_state.enemies[index].enter_ghost(pooka.ghost_duration)
    {
        debug!("[Rules] Ghost started enemy={} ticks={}", id, pooka.ghost_duration);
        game_state.events.push(GameEvent::GhostStarted { enemy: id });
    }
}

fn update_fygar(game_state: &mut GameState, index: usize, fygar: FygarParams) {
    game_state.enemies[index].tick_breath();

    let enemy = &game_state.enemies[index];
    if !enemy.can_breathe() || enemy.inflation() > 0 {
        return;
    }
    if !game_state.policy.should_breathe(enemy, &game_state.grid, &game_state.player) {
        return;
    }
    let Some(facing) = enemy.facing() else {
        return;
    };
    let id = enemy.id;
    let cells = breath_line(&game_state.grid, enemy.pos, facing, fygar.breath_range);
    if game_state.enemies[index].start_breath(cells.clone(), fygar.breath_duration, fygar.breath_cooldown) {
        debug!("[Rules] Breath started enemy={} facing={:?} cells={}", id, facing, cells.len());
        game_state.events.push(GameEvent::BreathStarted { enemy: id, cells });
    }
}

/// A player standing in any active breath is burned.
fn resolve_breath(game_state: &mut GameState) {
    if !game_state.player.is_alive() {
        return;
    }
    let pos = game_state.player.pos;
    let burned = game_state.enemies.iter().any(|e| e.is_alive() && e.breath_cells().contains(&pos));
    if burned {
        kill_player(game_state, DeathCause::Burned);
    }
}

pub fn remove_dead_enemies(game_state: &mut GameState) {
    game_state.enemies.retain(Enemy::is_alive);
}

/// Contact check, then the terminal status for this tick. Death wins over a clear.
pub fn evaluate_status(game_state: &mut GameState) -> TerminalStatus {
    if game_state.params.enemy_contact_kills && game_state.player.is_alive() {
        let pos = game_state.player.pos;
        if game_state.enemies.iter().any(|e| e.is_harmful() && e.pos == pos) {
            kill_player(game_state, DeathCause::Caught);
        }
    }

    if !game_state.player.is_alive() {
        return TerminalStatus::PlayerDead;
    }
    if game_state.enemies.iter().all(|e| !e.is_alive()) {
        let bonus = game_state.params.score.enemy_clear;
        game_state.score = game_state.score.saturating_add(bonus);
        game_state.events.push(GameEvent::LevelCleared { bonus });
        info!("[Rules] Level cleared tick={} score={}", game_state.tick, game_state.score);
        return TerminalStatus::LevelCleared;
    }
    TerminalStatus::Running
}

pub fn kill_player(game_state: &mut GameState, cause: DeathCause) {
    if !game_state.player.is_alive() {
        return;
    }
    game_state.player.kill();
    game_state.events.push(GameEvent::PlayerKilled { cause });
    info!("[Rules] Player killed tick={} cause={:?} pos={}", game_state.tick, cause, game_state.player.pos);
}
