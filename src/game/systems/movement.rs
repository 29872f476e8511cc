//! Movement system.
//!
//! Player movement (which digs on entering soil) and the enemies' chase step.

use log::debug;

use crate::game::entities::Enemy;
use crate::game::events::GameEvent;
use crate::game::grid::Grid;
use crate::game::state::GameState;
use crate::game::types::{Direction, Intent, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMove {
    /// Out of bounds, into a rock, too soon after the last move, or the player is dead.
    Blocked,
    Walked(Position),
    /// Dug the soil cell and moved into it.
    Dug(Position),
}

/// Apply the player's intent for this tick. Invalid intents are ignored.
pub fn apply_intent(game_state: &mut GameState, intent: Option<Intent>) {
    game_state.player.advance_move_counter();
    if !game_state.player.is_alive() {
        return;
    }
    match intent {
        Some(Intent::Move(direction)) => {
            move_player(game_state, direction);
        }
        Some(Intent::StartPump(direction)) => {
            let pump = game_state.params.pump;
            if game_state.player.start_pump(direction, pump.range, pump.duration) {
                game_state.events.push(GameEvent::PumpFired { direction });
            }
        }
        None => {}
    }
}

/// Move the player one cell, digging through soil on the way.
pub fn move_player(game_state: &mut GameState, direction: Direction) -> PlayerMove {
    let move_delay = game_state.params.player_move_delay;
    let dig_points = game_state.params.score.dig;
    let player = &mut game_state.player;

    if !player.is_alive() || !player.can_move(move_delay) {
        return PlayerMove::Blocked;
    }
    let target = player.pos.step(direction);
    if !game_state.grid.in_bounds(target) || game_state.grid.is_occupied_by_rock(target) {
        return PlayerMove::Blocked;
    }

    let dug = game_state.grid.dig(target);
    player.move_to(target);
    if dug {
        debug!("[Movement] Player dug pos={}", target);
        game_state.score = game_state.score.saturating_add(dig_points);
        game_state.events.push(GameEvent::Dug { pos: target, points: dig_points });
        PlayerMove::Dug(target)
    } else {
        PlayerMove::Walked(target)
    }
}

/// Directions that close the gap to `to`, best first: the axis with the larger gap
/// leads, ties go to the vertical axis.
pub fn chase_directions(from: Position, to: Position) -> Vec<Direction> {
    let (gap_x, gap_y) = (to.x - from.x, to.y - from.y);
    let horizontal = match gap_x.signum() {
        1 => Some(Direction::Right),
        -1 => Some(Direction::Left),
        _ => None,
    };
    let vertical = match gap_y.signum() {
        1 => Some(Direction::Down),
        -1 => Some(Direction::Up),
        _ => None,
    };
    let ordered = if gap_x.abs() > gap_y.abs() { [horizontal, vertical] } else { [vertical, horizontal] };
    ordered.into_iter().flatten().collect()
}

/// Tunnels only, unless the enemy is a ghost; never into a rock.
pub fn can_enemy_enter(grid: &Grid, enemy: &Enemy, pos: Position) -> bool {
    let terrain_ok = grid.is_tunnel(pos) || (enemy.is_ghost() && grid.in_bounds(pos));
    terrain_ok && !grid.is_occupied_by_rock(pos)
}

/// Take one chase step towards `target`. Returns the direction taken, if any.
pub fn move_enemy(grid: &Grid, enemy: &mut Enemy, target: Position) -> Option<Direction> {
    let direction = chase_directions(enemy.pos, target)
        .into_iter()
        .find(|&dir| can_enemy_enter(grid, enemy, enemy.pos.step(dir)))?;
    let next = enemy.pos.step(direction);
    enemy.step_to(next, direction);
    Some(direction)
}

/// A cornered enemy cannot take any step that closes the gap to `target`.
pub fn is_cornered(grid: &Grid, enemy: &Enemy, target: Position) -> bool {
    let directions = chase_directions(enemy.pos, target);
    !directions.is_empty() && directions.iter().all(|&dir| !can_enemy_enter(grid, enemy, enemy.pos.step(dir)))
}
