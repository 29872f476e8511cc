pub mod types;
pub mod events;
pub mod snapshot;
pub mod state;

pub mod entities;
pub mod grid;
pub mod systems;
pub mod demo;


pub use events::{DeathCause, GameEvent};
pub use snapshot::Snapshot;
pub use state::GameState;
pub use types::*;
