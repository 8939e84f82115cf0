mod math;
mod errors;
mod settings;

pub use math::*;
pub use errors::*;
pub use settings::*;
