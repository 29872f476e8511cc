//! Terminal demo of the simulation.
//!
//! Usage: `dig-trap [level.json]`. Without a file the classic level is played.

use std::env;
use std::io;

use dig_trap::game::demo::game_loop::run_game_loop;
use dig_trap::{GameState, LevelParams};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let params = match env::args().nth(1) {
        Some(path) => {
            info!("[Main] Loading level from {}", path);
            LevelParams::from_path(&path)?
        }
        None => LevelParams::default(),
    };
    let mut game_state = GameState::new(params)?;

    println!("Dig! w/a/s/d move, i/j/k/l pump, enter waits, r resets, q quits.");
    let stdin = io::stdin();
    let status = run_game_loop(&mut game_state, stdin.lock(), io::stdout())?;
    println!("Final score {} ({:?})", game_state.score, status);
    Ok(())
}
