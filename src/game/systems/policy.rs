//! Pluggable triggers for Pooka ghosting and Fygar fire breath.
//!
//! The simulation owns the state machines (ghost countdown, breath cooldown); a policy
//! only answers whether a trigger fires this tick.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::LevelParams;
use crate::game::entities::{Enemy, Player};
use crate::game::grid::Grid;
use crate::game::systems::movement::is_cornered;
use crate::game::types::{Direction, Position};

pub trait EnemyPolicy: fmt::Debug {
    /// Asked for Pookas that are not ghosting and not inflated.
    fn should_ghost(&mut self, enemy: &Enemy, grid: &Grid, player: &Player) -> bool;

    /// Asked for Fygars whose breath is off cooldown and that are not inflated.
    fn should_breathe(&mut self, enemy: &Enemy, grid: &Grid, player: &Player) -> bool;

    /// Called when the level restarts.
    fn reset(&mut self) {}
}

/// Default policy: a cornered Pooka may ghost, a Fygar facing the player within
/// reach may breathe, each with a fixed chance per tick from a seeded RNG.
#[derive(Debug, Clone)]
pub struct ChasePolicy {
    seed: u64,
    rng: StdRng,
    ghost_chance: f64,
    breath_chance: f64,
    breath_range: u32,
}

impl ChasePolicy {
    pub fn new(seed: u64, ghost_chance: f64, breath_chance: f64, breath_range: u32) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            ghost_chance: ghost_chance.clamp(0.0, 1.0),
            breath_chance: breath_chance.clamp(0.0, 1.0),
            breath_range,
        }
    }

    pub fn from_params(params: &LevelParams) -> Self {
        Self::new(params.seed, params.pooka.ghost_chance, params.fygar.breath_chance, params.fygar.breath_range)
    }
}

impl EnemyPolicy for ChasePolicy {
    fn should_ghost(&mut self, enemy: &Enemy, grid: &Grid, player: &Player) -> bool {
        !enemy.is_ghost() && is_cornered(grid, enemy, player.pos) && self.rng.random_bool(self.ghost_chance)
    }

    fn should_breathe(&mut self, enemy: &Enemy, grid: &Grid, player: &Player) -> bool {
        let Some(facing) = enemy.facing() else {
            return false;
        };
        breath_line(grid, enemy.pos, facing, self.breath_range).contains(&player.pos)
            && self.rng.random_bool(self.breath_chance)
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}

/// Never ghosts, never breathes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassivePolicy;

impl EnemyPolicy for PassivePolicy {
    fn should_ghost(&mut self, _enemy: &Enemy, _grid: &Grid, _player: &Player) -> bool {
        false
    }

    fn should_breathe(&mut self, _enemy: &Enemy, _grid: &Grid, _player: &Player) -> bool {
        false
    }
}

/// Cells a breath from `from` reaches: up to `range` tunnel cells in `facing`,
/// stopping at the first soil cell, rock or border.
pub fn breath_line(grid: &Grid, from: Position, facing: Direction, range: u32) -> Vec<Position> {
    (1..=range as i32)
        .map(|distance| from.offset(facing, distance))
        .take_while(|&cell| grid.is_tunnel(cell) && !grid.is_occupied_by_rock(cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LevelLayout;

    fn grid(rows: &[&str]) -> Grid {
        Grid::generate(&LevelLayout::parse(rows).unwrap())
    }

    #[test]
    fn breath_stops_at_soil() {
        let grid = grid(&["f..#..P"]);
        let line = breath_line(&grid, Position::new(0, 0), Direction::Right, 4);
        assert_eq!(line, vec![Position::new(1, 0), Position::new(2, 0)]);
    }

    #[test]
    fn certain_chase_policy_breathes_only_when_facing_the_player() {
        let grid = grid(&["P..f..."]);
        let player = Player::new(Position::new(0, 0));
        let mut policy = ChasePolicy::new(1, 1.0, 1.0, 4);

        let mut fygar = Enemy::fygar(0, Position::new(3, 0), 1);
        assert!(!policy.should_breathe(&fygar, &grid, &player));
        fygar.step_to(Position::new(3, 0), Direction::Left);
        assert!(policy.should_breathe(&fygar, &grid, &player));

        let pooka = Enemy::pooka(1, Position::new(3, 0), 1);
        assert!(!policy.should_breathe(&pooka, &grid, &player));
    }

    #[test]
    fn certain_chase_policy_ghosts_only_when_cornered() {
        let open = grid(&["P.p"]);
        let walled = grid(&["P#p"]);
        let player = Player::new(Position::new(0, 0));
        let pooka = Enemy::pooka(0, Position::new(2, 0), 1);
        let mut policy = ChasePolicy::new(1, 1.0, 1.0, 4);

        assert!(!policy.should_ghost(&pooka, &open, &player));
        assert!(policy.should_ghost(&pooka, &walled, &player));
    }

    #[test]
    fn reset_replays_the_same_rolls() {
        let grid = grid(&["P#p"]);
        let player = Player::new(Position::new(0, 0));
        let pooka = Enemy::pooka(0, Position::new(2, 0), 1);
        let mut policy = ChasePolicy::new(42, 0.5, 0.5, 4);

        let first: Vec<bool> = (0..32).map(|_| policy.should_ghost(&pooka, &grid, &player)).collect();
        policy.reset();
        let second: Vec<bool> = (0..32).map(|_| policy.should_ghost(&pooka, &grid, &player)).collect();
        assert_eq!(first, second);
    }
}
