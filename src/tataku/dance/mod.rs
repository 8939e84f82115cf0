mod mover;
mod movers;
mod generator;
mod mover_state;
mod mover_utils;
#[cfg(test)]
mod generator_tests;

pub use mover::*;
pub use movers::*;
pub use generator::*;
pub use mover_state::*;
pub use mover_utils::*;
