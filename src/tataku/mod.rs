mod mods;
mod dance;
mod replays;
pub mod beatmaps;

pub use mods::*;
pub use dance::*;
pub use replays::*;
pub use beatmaps::*;
