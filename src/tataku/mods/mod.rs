mod gameplay_mods;

pub use gameplay_mods::*;
