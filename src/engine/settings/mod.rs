mod dance_settings;

pub use dance_settings::*;
