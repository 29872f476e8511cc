//! Terrain grid module.

#[allow(clippy::module_inception)]
pub mod grid;

pub use grid::*;
