//! Dig-and-trap arcade simulation core.
//!
//! A fixed-step simulation of a player digging through soil, pumping enemies until
//! they pop and dropping rocks on them. Rendering and input live outside the crate:
//! callers queue intents, call [`GameState::tick`] and read back a [`Snapshot`].

pub mod config;
pub mod error;
pub mod game;

pub use config::LevelParams;
pub use error::ConfigError;
pub use game::{GameEvent, GameState, Intent, Snapshot, TerminalStatus};
