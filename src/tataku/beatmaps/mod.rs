mod timeline;
mod hit_object;
mod slider_path;

pub use timeline::*;
pub use hit_object::*;
pub use slider_path::*;
