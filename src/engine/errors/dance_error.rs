use std::{fmt::Display, io::Error as IOError};
use serde_json::Error as JsonError;

use super::*;

pub type DanceResult<T=()> = Result<T, DanceError>;

#[derive(Debug)]
pub enum DanceError {
    Timeline(TimelineError),
    IO(IOError),
    Serde(JsonError),

    String(String),
}
impl DanceError {
    pub fn from_err(e: impl std::error::Error) -> Self {
        Self::String(format!("{e}"))
    }
}

impl Display for DanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::Timeline(e) => write!(f, "{}", e),
            Self::IO(e) => write!(f, "{}", e),
            Self::Serde(e) => write!(f, "{:?}", e),
            Self::String(e) => write!(f, "{}", e),
        }
    }
}
impl std::error::Error for DanceError {}


impl From<TimelineError> for DanceError {
    fn from(e: TimelineError) -> Self {Self::Timeline(e)}
}
impl From<JsonError> for DanceError {
    fn from(e: JsonError) -> Self {Self::Serde(e)}
}
impl From<IOError> for DanceError {
    fn from(e: IOError) -> Self {Self::IO(e)}
}
impl From<String> for DanceError {
    fn from(e: String) -> Self {Self::String(e)}
}
