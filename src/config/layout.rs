//! Level layouts: terrain, rock placement and spawn points.
//!
//! A layout is either the classic level built from [`super::game`] constants or parsed
//! from ASCII rows:
//!
//! | glyph | meaning                     |
//! |-------|-----------------------------|
//! | `#`   | soil                        |
//! | `.`   | tunnel                      |
//! | `O`   | rock (sits in soil)         |
//! | `P`   | player spawn (on a tunnel)  |
//! | `p`   | Pooka spawn (on a tunnel)   |
//! | `f`   | Fygar spawn (on a tunnel)   |

use serde::{Serialize, Deserialize};

use crate::config::game::{GRID_COL, GRID_ROW, MAX_GRID_SIDE};
use crate::error::ConfigError;
use crate::game::types::{Archetype, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub archetype: Archetype,
    pub pos: Position,
}

impl EnemySpawn {
    pub const fn new(archetype: Archetype, pos: Position) -> Self {
        Self { archetype, pos }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub width: usize,
    pub height: usize,
    /// Cells that start excavated. Every other cell starts as soil.
    pub tunnels: Vec<Position>,
    pub rocks: Vec<Position>,
    pub player: Position,
    pub enemies: Vec<EnemySpawn>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::classic()
    }
}

impl LevelLayout {
    /// The classic level: a full-width tunnel through the middle row, three full-height
    /// shafts, two short galleries near the top and bottom, six rocks and six enemies.
    pub fn classic() -> Self {
        let (cols, rows) = (GRID_COL as i32, GRID_ROW as i32);
        let (mid_x, mid_y) = (cols / 2, rows / 2);

        let mut tunnels = Vec::new();
        let mut excavate = |pos: Position| {
            if !tunnels.contains(&pos) {
                tunnels.push(pos);
            }
        };
        for x in 0..cols {
            excavate(Position::new(x, mid_y));
        }
        for y in 0..rows {
            for x in [mid_x - 4, mid_x, mid_x + 4] {
                excavate(Position::new(x, y));
            }
        }
        for x in (mid_x - 2)..=(mid_x + 2) {
            excavate(Position::new(x, 2));
            excavate(Position::new(x, rows - 3));
        }

        // Candidates that land in a tunnel are dropped.
        let rocks = [
            (mid_x - 2, 2),
            (mid_x + 2, 2),
            (mid_x - 3, mid_y - 2),
            (mid_x + 3, mid_y - 2),
            (mid_x - 1, mid_y + 2),
            (mid_x + 1, mid_y + 2),
            (mid_x - 2, rows - 4),
            (mid_x + 2, rows - 4),
        ]
        .into_iter()
        .map(|(x, y)| Position::new(x, y))
        .filter(|pos| !tunnels.contains(pos))
        .collect();

        let pookas = [(mid_x - 4, mid_y - 3), (mid_x + 4, mid_y + 3), (mid_x - 2, 2), (mid_x + 2, rows - 3)];
        let fygars = [(mid_x, 2), (mid_x - 4, mid_y + 2)];
        let enemies = pookas
            .into_iter()
            .map(|(x, y)| EnemySpawn::new(Archetype::Pooka, Position::new(x, y)))
            .chain(fygars.into_iter().map(|(x, y)| EnemySpawn::new(Archetype::Fygar, Position::new(x, y))))
            .collect();

        Self {
            width: GRID_COL,
            height: GRID_ROW,
            tunnels,
            rocks,
            player: Position::new(mid_x, mid_y),
            enemies,
        }
    }

    /// Parse a layout from ASCII rows (see the module docs for the glyph table).
    pub fn parse(rows: &[&str]) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }

        let mut tunnels = Vec::new();
        let mut rocks = Vec::new();
        let mut enemies = Vec::new();
        let mut player = None;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(ConfigError::RaggedRow { row: y, expected: width, found });
            }
            for (x, glyph) in row.chars().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                match glyph {
                    '#' => {}
                    '.' => tunnels.push(pos),
                    'O' => rocks.push(pos),
                    'P' => {
                        tunnels.push(pos);
                        if player.replace(pos).is_some() {
                            return Err(ConfigError::DuplicatePlayer(pos));
                        }
                    }
                    'p' => {
                        tunnels.push(pos);
                        enemies.push(EnemySpawn::new(Archetype::Pooka, pos));
                    }
                    'f' => {
                        tunnels.push(pos);
                        enemies.push(EnemySpawn::new(Archetype::Fygar, pos));
                    }
                    _ => return Err(ConfigError::UnknownGlyph { glyph, x, y }),
                }
            }
        }

        let layout = Self {
            width,
            height,
            tunnels,
            rocks,
            player: player.ok_or(ConfigError::MissingPlayer)?,
            enemies,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Check that every placement is in bounds, rocks sit in soil and spawns sit in tunnels.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid { width: self.width, height: self.height });
        }
        if self.width > MAX_GRID_SIDE || self.height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge { width: self.width, height: self.height, max: MAX_GRID_SIDE });
        }
        for &pos in &self.tunnels {
            self.check_bounds("tunnel", pos)?;
        }
        for &pos in &self.rocks {
            self.check_bounds("rock", pos)?;
            if self.tunnels.contains(&pos) {
                return Err(ConfigError::RockInTunnel(pos));
            }
        }
        self.check_spawn("player", self.player)?;
        for spawn in &self.enemies {
            let what = match spawn.archetype {
                Archetype::Pooka => "pooka",
                Archetype::Fygar => "fygar",
            };
            self.check_spawn(what, spawn.pos)?;
        }
        Ok(())
    }

    fn check_bounds(&self, what: &'static str, pos: Position) -> Result<(), ConfigError> {
        let inside = pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height;
        if inside {
            Ok(())
        } else {
            Err(ConfigError::OutOfBounds { what, pos, width: self.width, height: self.height })
        }
    }

    fn check_spawn(&self, what: &'static str, pos: Position) -> Result<(), ConfigError> {
        self.check_bounds(what, pos)?;
        if !self.tunnels.contains(&pos) {
            return Err(ConfigError::SpawnInSoil { what, pos });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_layout_is_valid() {
        let layout = LevelLayout::classic();
        assert!(layout.validate().is_ok());
        assert_eq!(layout.rocks.len(), 6);
        assert_eq!(layout.enemies.len(), 6);
        assert_eq!(layout.player, Position::new(10, 7));
        assert!(layout.tunnels.contains(&layout.player));
    }

    #[test]
    fn parse_reads_every_glyph() {
        let layout = LevelLayout::parse(&["#O#", "P.p", "f.#"]).unwrap();
        assert_eq!((layout.width, layout.height), (3, 3));
        assert_eq!(layout.rocks, vec![Position::new(1, 0)]);
        assert_eq!(layout.player, Position::new(0, 1));
        assert_eq!(layout.tunnels.len(), 5);
        assert_eq!(
            layout.enemies,
            vec![
                EnemySpawn::new(Archetype::Pooka, Position::new(2, 1)),
                EnemySpawn::new(Archetype::Fygar, Position::new(0, 2)),
            ]
        );
    }

    #[test]
    fn parse_rejects_malformed_layouts() {
        assert!(matches!(LevelLayout::parse(&[]), Err(ConfigError::EmptyGrid { .. })));
        assert!(matches!(
            LevelLayout::parse(&["P..", ".."]),
            Err(ConfigError::RaggedRow { row: 1, expected: 3, found: 2 })
        ));
        assert!(matches!(
            LevelLayout::parse(&["P.x"]),
            Err(ConfigError::UnknownGlyph { glyph: 'x', x: 2, y: 0 })
        ));
        assert!(matches!(LevelLayout::parse(&["..."]), Err(ConfigError::MissingPlayer)));
        assert!(matches!(LevelLayout::parse(&["P.P"]), Err(ConfigError::DuplicatePlayer(_))));
    }

    #[test]
    fn validate_rejects_bad_placements() {
        let mut layout = LevelLayout::parse(&["#O#", "P.p"]).unwrap();
        layout.rocks.push(Position::new(1, 1));
        assert!(matches!(layout.validate(), Err(ConfigError::RockInTunnel(_))));

        let mut layout = LevelLayout::parse(&["#O#", "P.p"]).unwrap();
        layout.enemies.push(EnemySpawn::new(Archetype::Fygar, Position::new(0, 0)));
        assert!(matches!(layout.validate(), Err(ConfigError::SpawnInSoil { what: "fygar", .. })));

        let mut layout = LevelLayout::parse(&["#O#", "P.p"]).unwrap();
        layout.tunnels.push(Position::new(5, 0));
        assert!(matches!(layout.validate(), Err(ConfigError::OutOfBounds { what: "tunnel", .. })));
    }

    #[test]
    fn validate_rejects_oversized_grids() {
        let mut layout = LevelLayout::parse(&["P.p"]).unwrap();
        layout.width = 1_000_000;
        assert!(matches!(
            layout.validate(),
            Err(ConfigError::GridTooLarge { width: 1_000_000, height: 1, max: MAX_GRID_SIDE })
        ));

        layout.width = MAX_GRID_SIDE;
        assert!(layout.validate().is_ok());
    }
}
