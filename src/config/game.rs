/// Default gameplay constants.
///
/// Timings are in simulation ticks. These values seed [`LevelParams::default`](super::level::LevelParams)
/// and the classic layout; any of them can be overridden per level.

/// Number of columns in the classic grid.
pub const GRID_COL: usize = 20;

/// Number of rows in the classic grid.
pub const GRID_ROW: usize = 15;

/// Longest grid side a layout may declare.
pub const MAX_GRID_SIDE: usize = 4096;

/// Ticks the player must wait between two moves.
pub const PLAYER_MOVE_DELAY: u32 = 8;

/// Reach of the pump wire, in cells.
pub const PUMP_RANGE: u32 = 3;

/// Ticks a pump activation stays out.
pub const PUMP_DURATION: u32 = 30;

/// Pump hits needed to pop an enemy.
pub const INFLATION_REQUIRED: u32 = 3;

/// Ticks before an inflated enemy deflates by one step.
pub const INFLATION_DECAY: u32 = 60;

pub const POOKA_MOVE_DELAY: u32 = 15;
pub const POOKA_GHOST_DURATION: u32 = 120;

/// Chance per tick that a cornered Pooka starts ghosting.
pub const POOKA_GHOST_CHANCE: f64 = 0.01;

pub const FYGAR_MOVE_DELAY: u32 = 18;
pub const FYGAR_BREATH_RANGE: u32 = 4;
pub const FYGAR_BREATH_COOLDOWN: u32 = 180;
pub const FYGAR_BREATH_DURATION: u32 = 30;

/// Chance per tick that a Fygar facing the player breathes.
pub const FYGAR_BREATH_CHANCE: f64 = 0.02;

/// Ticks a rock wobbles before it falls.
pub const WOBBLE_DURATION: u32 = 30;

/// Ticks a falling rock needs to drop one cell.
pub const FALL_TICKS_PER_CELL: u32 = 4;

pub const SCORE_DIG_SOIL: u32 = 10;
pub const SCORE_PUMP_KILL: u32 = 200;
pub const SCORE_ROCK_KILL: u32 = 1000;
pub const SCORE_ROCK_MULTI_KILL: u32 = 2500;

/// Bonus for clearing every enemy of a level.
pub const SCORE_ENEMY_CLEAR: u32 = 500;

/// Extra reward [`GameState::step`](crate::game::GameState::step) pays per enemy removed.
pub const KILL_REWARD: i64 = 100;

pub const DEFAULT_SEED: u64 = 0x5eed_d16d;
