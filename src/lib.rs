#[macro_use] extern crate log;
pub mod engine;
pub mod tataku;
pub mod prelude;
