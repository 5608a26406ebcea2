//! Poisson detection probabilities for single sizes and size ranges
//!
//! Debris encounters are modeled as independent rare events. For an expected
//! count λ the chance of at least one detection is `1 - e^(-λ)`. Every public
//! probability is reported as a percentage in [0, 100].

pub mod density;
pub mod range;
pub mod single;
pub mod size_range;

pub use density::DebrisDensity;
pub use range::{DEFAULT_BIN_COUNT, DEFAULT_INTERVAL_COUNT};
pub use size_range::SizeRange;

/// Probability of at least one event for a Poisson rate `lambda`, as a fraction
pub fn poisson_detection(lambda: f64) -> f64 {
    1.0 - (-lambda).exp()
}

/// Union of two independent events, both given as fractions
pub fn independent_union(p_a: f64, p_b: f64) -> f64 {
    1.0 - (1.0 - p_a) * (1.0 - p_b)
}

pub(crate) fn fraction_to_percent(fraction: f64) -> f64 {
    fraction * 100.0
}

pub(crate) fn percent_to_fraction(percent: f64) -> f64 {
    percent / 100.0
}
