
/// reasons a list of hit objects cannot be turned into a timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineError {
    /// there are no objects at all
    NoObjects,
    /// the object at this index has a time, duration or position that isnt a finite number
    NonFinite { index: usize },
    /// the object at this index starts or ends further from zero than `MAX_OBJECT_TIME`
    TimeOutOfRange { index: usize },
    /// the object at this index starts before the one before it
    OutOfOrder { index: usize },
    /// the object at this index ends before it starts
    NegativeDuration { index: usize },
    /// a slider or (non-empty) spinner at this index has no length in time
    ZeroDuration { index: usize },
    /// a slider at this index has a path with no length
    InvalidSliderPath { index: usize },
}

impl std::fmt::Display for TimelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoObjects => write!(f, "timeline has no hit objects"),
            Self::NonFinite { index } => write!(f, "hit object {index} has a non-finite time, duration or position"),
            Self::TimeOutOfRange { index } => write!(f, "hit object {index} is outside the playable time range"),
            Self::OutOfOrder { index } => write!(f, "hit object {index} starts before the previous object"),
            Self::NegativeDuration { index } => write!(f, "hit object {index} ends before it starts"),
            Self::ZeroDuration { index } => write!(f, "hit object {index} has a duration of zero"),
            Self::InvalidSliderPath { index } => write!(f, "slider {index} has an empty path"),
        }
    }
}
