//! Level parameters accepted at construction.
//!
//! Every field has a default taken from [`super::game`], so a JSON document only needs to
//! name what it overrides:
//!
//! ```json
//! { "pump": { "range": 4 }, "seed": 7 }
//! ```

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Serialize, Deserialize};

use crate::config::game::*;
use crate::config::layout::LevelLayout;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PumpParams {
    pub range: u32,
    pub duration: u32,
}

impl Default for PumpParams {
    fn default() -> Self {
        Self { range: PUMP_RANGE, duration: PUMP_DURATION }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InflationParams {
    /// Inflation level at which an enemy pops.
    pub required: u32,
    pub decay_ticks: u32,
}

impl Default for InflationParams {
    fn default() -> Self {
        Self { required: INFLATION_REQUIRED, decay_ticks: INFLATION_DECAY }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PookaParams {
    pub move_delay: u32,
    pub ghost_duration: u32,
    pub ghost_chance: f64,
}

impl Default for PookaParams {
    fn default() -> Self {
        Self {
            move_delay: POOKA_MOVE_DELAY,
            ghost_duration: POOKA_GHOST_DURATION,
            ghost_chance: POOKA_GHOST_CHANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FygarParams {
    pub move_delay: u32,
    pub breath_range: u32,
    pub breath_duration: u32,
    pub breath_cooldown: u32,
    pub breath_chance: f64,
}

impl Default for FygarParams {
    fn default() -> Self {
        Self {
            move_delay: FYGAR_MOVE_DELAY,
            breath_range: FYGAR_BREATH_RANGE,
            breath_duration: FYGAR_BREATH_DURATION,
            breath_cooldown: FYGAR_BREATH_COOLDOWN,
            breath_chance: FYGAR_BREATH_CHANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RockParams {
    pub wobble_duration: u32,
    pub fall_ticks_per_cell: u32,
}

impl Default for RockParams {
    fn default() -> Self {
        Self { wobble_duration: WOBBLE_DURATION, fall_ticks_per_cell: FALL_TICKS_PER_CELL }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTable {
    pub dig: u32,
    pub pump_kill: u32,
    /// Awarded for every enemy a rock crushes.
    pub rock_kill: u32,
    /// Extra bonus when one fall crushes two or more enemies.
    pub rock_multi_kill: u32,
    pub enemy_clear: u32,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            dig: SCORE_DIG_SOIL,
            pump_kill: SCORE_PUMP_KILL,
            rock_kill: SCORE_ROCK_KILL,
            rock_multi_kill: SCORE_ROCK_MULTI_KILL,
            enemy_clear: SCORE_ENEMY_CLEAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelParams {
    pub layout: LevelLayout,
    pub player_move_delay: u32,
    pub pump: PumpParams,
    pub inflation: InflationParams,
    pub pooka: PookaParams,
    pub fygar: FygarParams,
    pub rock: RockParams,
    pub score: ScoreTable,
    /// Whether touching an active enemy kills the player.
    pub enemy_contact_kills: bool,
    /// Seed for the default enemy policy.
    pub seed: u64,
}

impl Default for LevelParams {
    fn default() -> Self {
        Self {
            layout: LevelLayout::classic(),
            player_move_delay: PLAYER_MOVE_DELAY,
            pump: PumpParams::default(),
            inflation: InflationParams::default(),
            pooka: PookaParams::default(),
            fygar: FygarParams::default(),
            rock: RockParams::default(),
            score: ScoreTable::default(),
            enemy_contact_kills: true,
            seed: DEFAULT_SEED,
        }
    }
}

impl LevelParams {
    /// Default parameters over a custom layout.
    pub fn with_layout(layout: LevelLayout) -> Self {
        Self { layout, ..Self::default() }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json).inspect_err(|err| {
            warn!("[LevelParams] Rejected {}: {}", path.display(), err);
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout.validate()?;

        let positive = [
            ("pump.duration", self.pump.duration),
            ("inflation.required", self.inflation.required),
            ("inflation.decay_ticks", self.inflation.decay_ticks),
            ("pooka.move_delay", self.pooka.move_delay),
            ("fygar.move_delay", self.fygar.move_delay),
            ("rock.fall_ticks_per_cell", self.rock.fall_ticks_per_cell),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::ZeroParameter(*name));
        }

        let longest_side = self.layout.width.max(self.layout.height);
        let ranges = [("pump.range", self.pump.range), ("fygar.breath_range", self.fygar.breath_range)];
        for (name, value) in ranges {
            if value as usize > longest_side {
                return Err(ConfigError::RangeTooLong { name, value, max: longest_side });
            }
        }

        let chances = [
            ("pooka.ghost_chance", self.pooka.ghost_chance),
            ("fygar.breath_chance", self.fygar.breath_chance),
        ];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}
