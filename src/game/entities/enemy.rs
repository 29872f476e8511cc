//! Enemy entities.
//!
//! Pookas and Fygars share position, move cadence and inflation. Archetype-specific
//! state lives in [`EnemyKind`] so every enemy sits in one homogeneous list and the
//! systems match on the kind where behavior differs.

use serde::{Serialize, Deserialize};

use crate::config::LevelParams;
use crate::game::types::{Archetype, Direction, EnemyId, Position};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PookaState {
    pub ghost: bool,
    pub ghost_remaining: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FygarState {
    pub facing: Direction,
    pub breath_cooldown: u32,
    pub breath_remaining: u32,
    /// Cells threatened by the current breath; empty when not breathing.
    pub breath_cells: Vec<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Pooka(PookaState),
    Fygar(FygarState),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InflateOutcome {
    Inflated(u32),
    Popped,
    /// The enemy was already dead.
    Ignored,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub pos: Position,
    move_counter: u32,
    move_delay: u32,
    inflation: u32,
    inflation_timer: u32,
    is_alive: bool,
    kind: EnemyKind,
}

impl Enemy {
    pub fn pooka(id: EnemyId, pos: Position, move_delay: u32) -> Self {
        Self::with_kind(id, pos, move_delay, EnemyKind::Pooka(PookaState { ghost: false, ghost_remaining: 0 }))
    }

    pub fn fygar(id: EnemyId, pos: Position, move_delay: u32) -> Self {
        Self::with_kind(
            id,
            pos,
            move_delay,
            EnemyKind::Fygar(FygarState {
                facing: Direction::Right,
                breath_cooldown: 0,
                breath_remaining: 0,
                breath_cells: Vec::new(),
            }),
        )
    }

    fn with_kind(id: EnemyId, pos: Position, move_delay: u32, kind: EnemyKind) -> Self {
        Self {
            id,
            pos,
            move_counter: 0,
            move_delay,
            inflation: 0,
            inflation_timer: 0,
            is_alive: true,
            kind,
        }
    }

    pub fn archetype(&self) -> Archetype {
        match self.kind {
            EnemyKind::Pooka(_) => Archetype::Pooka,
            EnemyKind::Fygar(_) => Archetype::Fygar,
        }
    }

    pub fn kind(&self) -> &EnemyKind {
        &self.kind
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    pub fn kill(&mut self) {
        self.is_alive = false;
    }

    pub fn inflation(&self) -> u32 {
        self.inflation
    }

    pub fn move_counter(&self) -> u32 {
        self.move_counter
    }

    pub fn is_ghost(&self) -> bool {
        matches!(&self.kind, EnemyKind::Pooka(pooka) if pooka.ghost)
    }

    pub fn is_breathing(&self) -> bool {
        matches!(&self.kind, EnemyKind::Fygar(fygar) if fygar.breath_remaining > 0)
    }

    pub fn facing(&self) -> Option<Direction> {
        match &self.kind {
            EnemyKind::Fygar(fygar) => Some(fygar.facing),
            EnemyKind::Pooka(_) => None,
        }
    }

    pub fn breath_cells(&self) -> &[Position] {
        match &self.kind {
            EnemyKind::Fygar(fygar) => fygar.breath_cells.as_slice(),
            EnemyKind::Pooka(_) => &[],
        }
    }

    /// Whether touching this enemy hurts the player.
    pub fn is_harmful(&self) -> bool {
        self.is_alive && self.inflation == 0 && !self.is_ghost()
    }

    /// Count one tick of move cadence. Returns true when a step is due, resetting the
    /// counter. Inflated enemies are frozen and never become due.
    pub fn advance_move_counter(&mut self) -> bool {
        if self.inflation > 0 {
            return false;
        }
        self.move_counter += 1;
        if self.move_counter >= self.move_delay {
            self.move_counter = 0;
            true
        } else {
            false
        }
    }

    pub fn step_to(&mut self, pos: Position, direction: Direction) {
        self.pos = pos;
        if let EnemyKind::Fygar(fygar) = &mut self.kind {
            if direction.is_horizontal() {
                fygar.facing = direction;
            }
        }
    }

    /// One pump hit. Pops the enemy when inflation reaches `required`.
    pub fn inflate(&mut self, required: u32, decay_ticks: u32) -> InflateOutcome {
        if !self.is_alive {
            return InflateOutcome::Ignored;
        }
        self.inflation = (self.inflation + 1).min(required);
        self.inflation_timer = decay_ticks;
        if self.inflation >= required {
            self.is_alive = false;
            InflateOutcome::Popped
        } else {
            InflateOutcome::Inflated(self.inflation)
        }
    }

    /// Count down towards deflating one step. Returns true when a step was lost.
    pub fn decay_inflation(&mut self, decay_ticks: u32) -> bool {
        if self.inflation == 0 {
            return false;
        }
        self.inflation_timer = self.inflation_timer.saturating_sub(1);
        if self.inflation_timer > 0 {
            return false;
        }
        self.inflation -= 1;
        self.inflation_timer = decay_ticks;
        true
    }

    /// Enter ghost mode for `duration` ticks. Pookas only; ignored while already ghosting.
    pub fn enter_ghost(&mut self, duration: u32) -> bool {
        match &mut self.kind {
            EnemyKind::Pooka(pooka) if !pooka.ghost && duration > 0 => {
                pooka.ghost = true;
                pooka.ghost_remaining = duration;
                true
            }
            _ => false,
        }
    }

    /// Count down ghost mode. Returns true on the tick it expires.
    pub fn tick_ghost(&mut self) -> bool {
        match &mut self.kind {
            EnemyKind::Pooka(pooka) if pooka.ghost => {
                pooka.ghost_remaining = pooka.ghost_remaining.saturating_sub(1);
                if pooka.ghost_remaining == 0 {
                    pooka.ghost = false;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    pub fn can_breathe(&self) -> bool {
        matches!(&self.kind, EnemyKind::Fygar(fygar) if fygar.breath_cooldown == 0 && fygar.breath_remaining == 0)
    }

    /// Count down breath cooldown and the active breath. Returns true on the tick the breath ends.
    pub fn tick_breath(&mut self) -> bool {
        let EnemyKind::Fygar(fygar) = &mut self.kind else {
            return false;
        };
        fygar.breath_cooldown = fygar.breath_cooldown.saturating_sub(1);
        if fygar.breath_remaining == 0 {
            return false;
        }
        fygar.breath_remaining -= 1;
        if fygar.breath_remaining == 0 {
            fygar.breath_cells.clear();
            true
        } else {
            false
        }
    }

    /// Breathe fire over `cells` for `duration` ticks, then rest for `cooldown` ticks.
    pub fn start_breath(&mut self, cells: Vec<Position>, duration: u32, cooldown: u32) -> bool {
        if !self.can_breathe() || duration == 0 {
            return false;
        }
        if let EnemyKind::Fygar(fygar) = &mut self.kind {
            fygar.breath_cells = cells;
            fygar.breath_remaining = duration;
            fygar.breath_cooldown = cooldown;
        }
        true
    }
}

/// Build the level's enemies from their spawn points. Ids follow spawn order.
pub fn spawn_enemies(params: &LevelParams) -> Vec<Enemy> {
    params
        .layout
        .enemies
        .iter()
        .enumerate()
        .map(|(index, spawn)| {
            let id = index as EnemyId;
            match spawn.archetype {
                Archetype::Pooka => Enemy::pooka(id, spawn.pos, params.pooka.move_delay),
                Archetype::Fygar => Enemy::fygar(id, spawn.pos, params.fygar.move_delay),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_when_counter_reaches_delay() {
        let mut enemy = Enemy::pooka(1, Position::new(0, 0), 3);
        assert!(!enemy.advance_move_counter());
        assert!(!enemy.advance_move_counter());
        assert!(enemy.advance_move_counter());
        assert_eq!(enemy.move_counter(), 0);
    }

    #[test]
    fn inflation_is_clamped_and_pops_at_threshold() {
        let mut enemy = Enemy::fygar(1, Position::new(0, 0), 3);
        assert_eq!(enemy.inflate(3, 10), InflateOutcome::Inflated(1));
        assert_eq!(enemy.inflate(3, 10), InflateOutcome::Inflated(2));
        assert_eq!(enemy.inflate(3, 10), InflateOutcome::Popped);
        assert_eq!(enemy.inflation(), 3);
        assert!(!enemy.is_alive());
        assert_eq!(enemy.inflate(3, 10), InflateOutcome::Ignored);
        assert_eq!(enemy.inflation(), 3);
    }

    #[test]
    fn inflation_decays_one_step_per_countdown() {
        let mut enemy = Enemy::pooka(1, Position::new(0, 0), 3);
        enemy.inflate(3, 2);
        enemy.inflate(3, 2);
        assert!(!enemy.decay_inflation(2));
        assert!(enemy.decay_inflation(2));
        assert_eq!(enemy.inflation(), 1);
        assert!(!enemy.decay_inflation(2));
        assert!(enemy.decay_inflation(2));
        assert_eq!(enemy.inflation(), 0);
        assert!(!enemy.decay_inflation(2));
        assert_eq!(enemy.inflation(), 0);
    }

    #[test]
    fn inflated_enemies_are_frozen() {
        let mut enemy = Enemy::pooka(1, Position::new(0, 0), 1);
        enemy.inflate(3, 5);
        assert!(!enemy.advance_move_counter());
        assert!(!enemy.is_harmful());
    }

    #[test]
    fn ghost_mode_is_time_boxed() {
        let mut pooka = Enemy::pooka(1, Position::new(0, 0), 3);
        assert!(pooka.enter_ghost(2));
        assert!(!pooka.enter_ghost(2));
        assert!(pooka.is_ghost());
        assert!(!pooka.tick_ghost());
        assert!(pooka.tick_ghost());
        assert!(!pooka.is_ghost());

        let mut fygar = Enemy::fygar(2, Position::new(0, 0), 3);
        assert!(!fygar.enter_ghost(2));
    }

    #[test]
    fn breath_runs_for_duration_then_cools_down() {
        let mut fygar = Enemy::fygar(1, Position::new(0, 0), 3);
        assert!(fygar.can_breathe());
        assert!(fygar.start_breath(vec![Position::new(1, 0)], 2, 4));
        assert!(fygar.is_breathing());
        assert!(!fygar.can_breathe());
        assert!(!fygar.tick_breath());
        assert!(fygar.tick_breath());
        assert!(fygar.breath_cells().is_empty());
        assert!(!fygar.can_breathe());
        fygar.tick_breath();
        fygar.tick_breath();
        assert!(fygar.can_breathe());
    }

    #[test]
    fn fygar_faces_last_horizontal_step() {
        let mut fygar = Enemy::fygar(1, Position::new(1, 1), 3);
        fygar.step_to(Position::new(0, 1), Direction::Left);
        fygar.step_to(Position::new(0, 0), Direction::Up);
        assert_eq!(fygar.facing(), Some(Direction::Left));
    }
}
