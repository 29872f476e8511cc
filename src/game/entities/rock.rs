//! Rock entity: a stable → wobbling → falling → inert state machine.
//!
//! A rock never looks at the grid. The simulation decides when a rock loses its
//! support ([`Rock::trigger`]) and whether the cell beneath is open when the rock is
//! ready to drop ([`RockStep::ReadyToDrop`]).

use serde::{Serialize, Deserialize};

use crate::game::types::{EnemyId, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RockState {
    Stable,
    Wobbling,
    Falling,
    /// Landed. A solid obstacle for the rest of the level.
    Inert,
}

impl RockState {
    pub const ALL: [RockState; 4] = [RockState::Stable, RockState::Wobbling, RockState::Falling, RockState::Inert];

    /// The only legal moves are one step forward along stable → wobbling → falling → inert.
    pub fn can_transition_to(self, next: RockState) -> bool {
        matches!(
            (self, next),
            (RockState::Stable, RockState::Wobbling)
                | (RockState::Wobbling, RockState::Falling)
                | (RockState::Falling, RockState::Inert)
        )
    }
}

/// Something a single fall has already crushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrushVictim {
    Player,
    Enemy(EnemyId),
}

/// What a rock wants after advancing its own timers for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RockStep {
    Idle,
    StartedFalling,
    /// Fall progress crossed the per-cell threshold.
    ReadyToDrop,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rock {
    pub pos: Position,
    origin: Position,
    state: RockState,
    wobble_remaining: u32,
    fall_progress: u32,
    cells_fallen: u32,
    crushed: Vec<CrushVictim>,
}

impl Rock {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            origin: pos,
            state: RockState::Stable,
            wobble_remaining: 0,
            fall_progress: 0,
            cells_fallen: 0,
            crushed: Vec::new(),
        }
    }

    pub fn state(&self) -> RockState {
        self.state
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn wobble_remaining(&self) -> u32 {
        self.wobble_remaining
    }

    pub fn fall_progress(&self) -> u32 {
        self.fall_progress
    }

    pub fn cells_fallen(&self) -> u32 {
        self.cells_fallen
    }

    pub fn crushed(&self) -> &[CrushVictim] {
        &self.crushed
    }

    pub fn enemies_crushed(&self) -> usize {
        self.crushed.iter().filter(|v| matches!(v, CrushVictim::Enemy(_))).count()
    }

    /// Start wobbling because the cell beneath lost its soil.
    /// Returns false (and changes nothing) unless the rock is stable.
    pub fn trigger(&mut self, wobble_duration: u32) -> bool {
        if self.state != RockState::Stable {
            return false;
        }
        self.transition(RockState::Wobbling);
        self.wobble_remaining = wobble_duration;
        if wobble_duration == 0 {
            self.start_falling();
        }
        true
    }

    /// Advance the wobble countdown or the fall progress by one tick.
    pub fn update(&mut self, fall_ticks_per_cell: u32) -> RockStep {
        match self.state {
            RockState::Stable | RockState::Inert => RockStep::Idle,
            RockState::Wobbling => {
                self.wobble_remaining = self.wobble_remaining.saturating_sub(1);
                if self.wobble_remaining == 0 {
                    self.start_falling();
                    RockStep::StartedFalling
                } else {
                    RockStep::Idle
                }
            }
            RockState::Falling => {
                // Held at the threshold while the rock waits on something below it.
                self.fall_progress = (self.fall_progress + 1).min(fall_ticks_per_cell);
                if self.fall_progress >= fall_ticks_per_cell {
                    RockStep::ReadyToDrop
                } else {
                    RockStep::Idle
                }
            }
        }
    }

    /// Move one cell down. Only meaningful while falling.
    pub fn drop_one(&mut self) {
        debug_assert_eq!(self.state, RockState::Falling);
        self.pos = self.pos.below();
        self.cells_fallen += 1;
        self.fall_progress = 0;
    }

    pub fn land(&mut self) {
        self.transition(RockState::Inert);
        self.fall_progress = 0;
    }

    /// Credit a crush to the current fall. Returns false if this victim was already credited.
    pub fn record_crush(&mut self, victim: CrushVictim) -> bool {
        if self.crushed.contains(&victim) {
            return false;
        }
        self.crushed.push(victim);
        true
    }

    fn start_falling(&mut self) {
        self.transition(RockState::Falling);
        self.fall_progress = 0;
        self.crushed.clear();
    }

    fn transition(&mut self, next: RockState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal rock transition {:?} -> {:?}",
            self.state,
            next
        );
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_forward_transitions_are_legal() {
        let legal: Vec<_> = RockState::ALL
            .iter()
            .flat_map(|&from| RockState::ALL.iter().map(move |&to| (from, to)))
            .filter(|&(from, to)| from.can_transition_to(to))
            .collect();
        assert_eq!(
            legal,
            vec![
                (RockState::Stable, RockState::Wobbling),
                (RockState::Wobbling, RockState::Falling),
                (RockState::Falling, RockState::Inert),
            ]
        );
    }

    #[test]
    fn wobbles_for_its_duration_then_falls() {
        let mut rock = Rock::new(Position::new(1, 1));
        assert!(rock.trigger(3));
        assert!(!rock.trigger(3));
        assert_eq!(rock.update(4), RockStep::Idle);
        assert_eq!(rock.update(4), RockStep::Idle);
        assert_eq!(rock.state(), RockState::Wobbling);
        assert_eq!(rock.update(4), RockStep::StartedFalling);
        assert_eq!(rock.state(), RockState::Falling);
    }

    #[test]
    fn drops_once_per_threshold() {
        let mut rock = Rock::new(Position::new(0, 0));
        rock.trigger(1);
        rock.update(2);
        assert_eq!(rock.update(2), RockStep::Idle);
        assert_eq!(rock.update(2), RockStep::ReadyToDrop);
        rock.drop_one();
        assert_eq!(rock.pos, Position::new(0, 1));
        assert_eq!(rock.fall_progress(), 0);
        assert_eq!(rock.cells_fallen(), 1);
    }

    #[test]
    fn inert_rocks_ignore_triggers_and_updates() {
        let mut rock = Rock::new(Position::new(0, 0));
        rock.trigger(0);
        assert_eq!(rock.state(), RockState::Falling);
        rock.land();
        assert!(!rock.trigger(5));
        assert_eq!(rock.update(1), RockStep::Idle);
        assert_eq!(rock.state(), RockState::Inert);
    }

    #[test]
    fn credits_each_victim_once_per_fall() {
        let mut rock = Rock::new(Position::new(0, 0));
        rock.trigger(1);
        rock.update(1);
        assert!(rock.record_crush(CrushVictim::Enemy(4)));
        assert!(!rock.record_crush(CrushVictim::Enemy(4)));
        assert!(rock.record_crush(CrushVictim::Player));
        assert!(rock.record_crush(CrushVictim::Enemy(5)));
        assert_eq!(rock.enemies_crushed(), 2);
        assert_eq!(rock.crushed().len(), 3);
    }
}
