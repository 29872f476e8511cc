//! Player entity: position, move cadence and the pump weapon.

use serde::{Serialize, Deserialize};

use crate::game::types::{Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PumpState {
    Inactive,
    Active {
        direction: Direction,
        remaining: u32,
        /// Where the player stood when the pump fired. The wire runs from here.
        origin: Position,
        /// Furthest cell the wire reaches from where it was fired.
        target: Position,
        /// Where this activation struck an enemy, once it has.
        hit: Option<Position>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
    pump: PumpState,
    ticks_since_move: u32,
    is_alive: bool,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            pump: PumpState::Inactive,
            ticks_since_move: 0,
            is_alive: true,
        }
    }

    pub fn pump(&self) -> PumpState {
        self.pump
    }

    pub fn is_pumping(&self) -> bool {
        matches!(self.pump, PumpState::Active { .. })
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    pub fn kill(&mut self) {
        self.is_alive = false;
        self.pump = PumpState::Inactive;
    }

    /// Count one tick towards the next allowed move.
    pub fn advance_move_counter(&mut self) {
        self.ticks_since_move = self.ticks_since_move.saturating_add(1);
    }

    pub fn can_move(&self, move_delay: u32) -> bool {
        self.ticks_since_move >= move_delay
    }

    pub fn move_to(&mut self, pos: Position) {
        self.pos = pos;
        self.ticks_since_move = 0;
    }

    /// Fire the pump. Ignored while a pump is already out.
    pub fn start_pump(&mut self, direction: Direction, range: u32, duration: u32) -> bool {
        if self.is_pumping() || duration == 0 {
            return false;
        }
        self.pump = PumpState::Active {
            direction,
            remaining: duration,
            origin: self.pos,
            target: self.pos.offset(direction, range as i32),
            hit: None,
        };
        true
    }

    pub fn record_pump_hit(&mut self, pos: Position) {
        if let PumpState::Active { hit, .. } = &mut self.pump {
            *hit = Some(pos);
        }
    }

    /// Count down the active pump; it retracts when the countdown reaches zero.
    pub fn update_pump(&mut self) {
        if let PumpState::Active { remaining, .. } = &mut self.pump {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.pump = PumpState::Inactive;
            }
        }
    }
}
