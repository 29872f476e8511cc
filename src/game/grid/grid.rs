use crate::config::LevelLayout;
use crate::game::entities::{Rock, RockState};
use crate::game::types::{Cell, Position};

/// Terrain plus the rocks embedded in it.
///
/// The grid is the only owner of rocks. Everything else finds a rock by coordinate
/// through [`Grid::rock_at`] and never keeps a handle to one.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
    rocks: Vec<Rock>,
}

impl Grid {
    /// An all-soil grid without rocks.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![Cell::Soil; width]; height],
            rocks: Vec::new(),
        }
    }

    /// Soil everywhere except the layout's tunnels, with a stable rock on each rock cell.
    pub fn generate(layout: &LevelLayout) -> Self {
        let mut grid = Self::new(layout.width, layout.height);
        for &pos in &layout.tunnels {
            grid.dig(pos);
        }
        grid.rocks = layout.rocks.iter().map(|&pos| Rock::new(pos)).collect();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows of cells, indexed `[y][x]`.
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[pos.y as usize][pos.x as usize])
    }

    /// False outside the grid.
    pub fn is_soil(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Soil)
    }

    /// False outside the grid.
    pub fn is_tunnel(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Tunnel)
    }

    /// Turn soil into tunnel. Returns false if the cell was already a tunnel or is
    /// outside the grid.
    pub fn dig(&mut self, pos: Position) -> bool {
        if !self.is_soil(pos) {
            return false;
        }
        self.cells[pos.y as usize][pos.x as usize] = Cell::Tunnel;
        true
    }

    /// Soil and the border outside the grid are solid; tunnels are not.
    pub fn has_solid_ground(&self, pos: Position) -> bool {
        match self.cell(pos) {
            Some(Cell::Soil) | None => true,
            Some(Cell::Tunnel) => false,
        }
    }

    pub fn rock_at(&self, pos: Position) -> Option<&Rock> {
        self.rocks.iter().find(|rock| rock.pos == pos)
    }

    /// Whether a rock blocks walking into `pos`. Falling rocks count too.
    pub fn is_occupied_by_rock(&self, pos: Position) -> bool {
        self.rock_at(pos).is_some()
    }

    /// Whether `pos` holds a rock that will not move out of the way this tick.
    pub fn has_resting_rock(&self, pos: Position) -> bool {
        self.rock_at(pos).is_some_and(|rock| rock.state() != RockState::Falling)
    }

    pub fn rocks(&self) -> &[Rock] {
        &self.rocks
    }

    pub fn rocks_mut(&mut self) -> &mut [Rock] {
        &mut self.rocks
    }

    pub fn tunnel_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == Cell::Tunnel).count()
    }
}
