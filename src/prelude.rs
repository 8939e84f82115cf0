// std imports
pub use std::fmt::Display;
pub use std::f32::consts::PI;
pub use std::path::{ Path, PathBuf };
pub use std::sync::Arc;

// serde imports
pub use serde::{ Serialize, Deserialize };

// general imports
pub use crate::engine::*;
pub use crate::tataku::*;
