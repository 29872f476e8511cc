//! Standalone game loop for local testing/demo.
//!
//! Reads one command per line and prints the board after every command.

use std::io::{self, BufRead, Write};

use log::info;

use crate::game::demo::render::render;
use crate::game::state::GameState;
use crate::game::types::{Direction, Intent, TerminalStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Act(Intent),
    Wait,
    Reset,
    Quit,
}

/// `w/a/s/d` move, `i/j/k/l` pump, empty line waits, `r` resets, `q` quits.
pub fn parse_command(line: &str) -> Option<Command> {
    let command = match line.trim() {
        "" => Command::Wait,
        "w" => Command::Act(Intent::Move(Direction::Up)),
        "a" => Command::Act(Intent::Move(Direction::Left)),
        "s" => Command::Act(Intent::Move(Direction::Down)),
        "d" => Command::Act(Intent::Move(Direction::Right)),
        "i" => Command::Act(Intent::StartPump(Direction::Up)),
        "j" => Command::Act(Intent::StartPump(Direction::Left)),
        "k" => Command::Act(Intent::StartPump(Direction::Down)),
        "l" => Command::Act(Intent::StartPump(Direction::Right)),
        "r" => Command::Reset,
        "q" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Idle until the player may move again, then spend one tick on the command.
fn advance(game_state: &mut GameState, intent: Option<Intent>) -> TerminalStatus {
    let idle = game_state.params().player_move_delay.saturating_sub(1);
    for _ in 0..idle {
        if game_state.tick().is_terminal() {
            return game_state.status;
        }
    }
    if let Some(intent) = intent {
        game_state.queue_intent(intent);
    }
    game_state.tick()
}

/// Drive the simulation from `input` until it ends, the input runs dry or `q`.
pub fn run_game_loop<R: BufRead, W: Write>(
    game_state: &mut GameState,
    input: R,
    mut output: W,
) -> io::Result<TerminalStatus> {
    write!(output, "{}", render(&game_state.snapshot()))?;

    for line in input.lines() {
        let line = line?;
        let status = match parse_command(&line) {
            Some(Command::Act(intent)) => advance(game_state, Some(intent)),
            Some(Command::Wait) => advance(game_state, None),
            Some(Command::Reset) => {
                game_state.reset();
                game_state.status
            }
            Some(Command::Quit) => break,
            None => {
                writeln!(output, "unknown command {:?}", line.trim())?;
                continue;
            }
        };

        write!(output, "{}", render(&game_state.snapshot()))?;
        match status {
            TerminalStatus::PlayerDead => writeln!(output, "Player is dead. Game Over! (r to retry)")?,
            TerminalStatus::LevelCleared => writeln!(output, "Level cleared! (r to replay)")?,
            TerminalStatus::Running => {}
        }
        output.flush()?;
    }

    info!("[Demo] Session over tick={} score={}", game_state.tick, game_state.score);
    Ok(game_state.status)
}
