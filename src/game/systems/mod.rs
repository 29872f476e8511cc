//! Game systems module.
//!
//! Each system advances one concern of the simulation during a tick.

pub mod movement;
pub mod physics;
pub mod policy;
pub mod rules;

pub use movement::*;
pub use physics::*;
pub use policy::*;
pub use rules::*;
