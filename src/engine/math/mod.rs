mod bounds;
mod easing;
mod vector2;
mod interpolation;

pub use bounds::*;
pub use easing::*;
pub use vector2::*;
pub use interpolation::*;
