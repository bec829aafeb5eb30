// src/error.rs

use thiserror::Error;

/// Reasons a raw request is rejected before scoring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    /// A numeric field is outside its declared domain (or is not an integer where one is required).
    #[error("{field} must be {expected} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
    /// An enumerated field holds an unrecognised value.
    #[error("{field} must be one of {expected} (got {value:?})")]
    InvalidEnum {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl PredictionError {
    /// Stable name of the error category, used on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::OutOfRange { .. } => "OutOfRangeError",
            PredictionError::InvalidEnum { .. } => "InvalidEnumError",
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            PredictionError::OutOfRange { field, .. } | PredictionError::InvalidEnum { field, .. } => {
                *field
            }
        }
    }
}
