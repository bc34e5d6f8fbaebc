use thiserror::Error;

/// Invalid input to the pebble predictor.
///
/// Raised by validation before any physics runs. The explicit time
/// integration would otherwise carry a NaN from one bad cell into every
/// later row.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PebbleError {
    #[error("{name} is empty")]
    EmptyGrid { name: &'static str },

    #[error("{name} needs at least {min} points, got {len}")]
    GridTooShort {
        name: &'static str,
        len: usize,
        min: usize,
    },

    #[error("{name} has length {actual}, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{name} is not strictly increasing at index {index}")]
    NotIncreasing { name: &'static str, index: usize },

    #[error("{name}[{index}] must be positive, got {value}")]
    NonPositive {
        name: &'static str,
        index: usize,
        value: f64,
    },

    #[error("{name}[{index}] is not finite")]
    NonFinite { name: &'static str, index: usize },

    #[error("time grid value {value} at index {index} is negative")]
    NegativeTime { index: usize, value: f64 },
}

pub type PebbleResult<T> = Result<T, PebbleError>;
