mod pippi;
mod flower;
mod momentum;
mod half_circle;

pub use pippi::*;
pub use flower::*;
pub use momentum::*;
pub use half_circle::*;
