//! Terminal rendering of a snapshot.
//!
//! One character per cell; entities are drawn over terrain in the order rocks,
//! breath, enemies, player.

use crate::game::entities::{EnemyKind, PumpState, RockState};
use crate::game::snapshot::{EnemyView, Snapshot};
use crate::game::types::{Archetype, Cell, Position};

fn enemy_glyph(enemy: &EnemyView, ghost: bool) -> char {
    match (enemy.archetype, ghost, enemy.inflation) {
        (_, _, level) if level > 0 => char::from_digit(level.min(9), 10).unwrap_or('*'),
        (Archetype::Pooka, true, _) => 'g',
        (Archetype::Pooka, false, _) => 'p',
        (Archetype::Fygar, _, _) => 'f',
    }
}

fn rock_glyph(state: RockState) -> char {
    match state {
        RockState::Stable | RockState::Inert => 'O',
        RockState::Wobbling => '0',
        RockState::Falling => 'o',
    }
}

/// Draw the grid with every entity on it.
pub fn render_grid(snapshot: &Snapshot) -> String {
    let mut canvas: Vec<Vec<char>> = snapshot
        .cells
        .iter()
        .map(|row| row.iter().map(|cell| if *cell == Cell::Soil { '#' } else { ' ' }).collect())
        .collect();

    let mut paint = |pos: Position, glyph: char| {
        if pos.x < 0 || pos.y < 0 {
            return;
        }
        if let Some(slot) = canvas.get_mut(pos.y as usize).and_then(|row| row.get_mut(pos.x as usize)) {
            *slot = glyph;
        }
    };

    for rock in &snapshot.rocks {
        paint(rock.pos, rock_glyph(rock.state));
    }
    for enemy in &snapshot.enemies {
        if let EnemyKind::Fygar(fygar) = &enemy.kind {
            for &cell in &fygar.breath_cells {
                paint(cell, '~');
            }
        }
    }
    if let PumpState::Active { hit: Some(hit), .. } = snapshot.player.pump {
        paint(hit, '+');
    }
    for enemy in &snapshot.enemies {
        let ghost = matches!(&enemy.kind, EnemyKind::Pooka(pooka) if pooka.ghost);
        paint(enemy.pos, enemy_glyph(enemy, ghost));
    }
    paint(snapshot.player.pos, if snapshot.player.is_alive { 'P' } else { 'X' });

    canvas.into_iter().map(|row| row.into_iter().collect::<String>() + "\n").collect()
}

/// Status line followed by the grid.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = format!("tick {:>5}  score {:>6}  {:?}\n", snapshot.tick, snapshot.score, snapshot.status);
    out.push_str(&render_grid(snapshot));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LevelLayout, LevelParams};
    use crate::game::state::GameState;

    #[test]
    fn draws_terrain_and_entities() {
        let layout = LevelLayout::parse(&["#O#", "P.p"]).unwrap();
        let state = GameState::new(LevelParams::with_layout(layout)).unwrap();
        assert_eq!(render_grid(&state.snapshot()), "#O#\nP p\n");
    }

    #[test]
    fn status_line_comes_first() {
        let state = GameState::new(LevelParams::default()).unwrap();
        let text = render(&state.snapshot());
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("tick     0"));
        assert_eq!(lines.count(), state.grid.height());
    }
}
