mod dance_error;
mod timeline_error;

pub use dance_error::*;
pub use timeline_error::*;


pub trait LogError {
    fn log_error_message(self, msg: &str) -> Self;
}

impl<T, E:ToString> LogError for Result<T, E> {
    fn log_error_message(self, msg: &str) -> Self {
        if let Err(e) = &self {
            error!("{msg}: {}", e.to_string())
        }
        self
    }
}
