use thiserror::Error;

/// Errors produced while configuring or evaluating the detection model.
#[derive(Error, Debug)]
pub enum DetectionError {
    /// Sensor, orbit or density parameters are physically invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Debris size is negative or not a finite number.
    #[error("invalid debris size: {size_m} m")]
    InvalidDebrisSize {
        /// Offending size in meters.
        size_m: f64,
    },

    /// Size range bounds are inverted, empty, negative or non-finite.
    #[error("invalid size range: [{min_m}, {max_m}] m")]
    InvalidSizeRange {
        /// Lower bound in meters.
        min_m: f64,
        /// Upper bound in meters.
        max_m: f64,
    },

    /// Interval or bin count of zero.
    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),

    /// Target probability outside [0, 100).
    #[error("target probability must be in [0, 100), got {0}")]
    InvalidProbability(f64),

    /// Target probability can never be reached because the detection rate is zero.
    #[error("probability {0}% is unreachable with a zero detection rate")]
    UnreachableProbability(f64),

    /// Reading or writing a scenario or report file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario JSON could not be parsed or serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Report rows could not be written as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, DetectionError>;
