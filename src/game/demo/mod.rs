// Terminal demo: an ASCII renderer over the snapshot and a stdin-driven loop.
pub mod game_loop;
pub mod render;
