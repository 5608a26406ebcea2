//! Detection probabilities aggregated over a range of debris sizes
//!
//! Two aggregations answer different questions and are kept separate:
//!
//! - [`DetectionModel::probability_in_size_range`] averages the single-size
//!   probability over evenly spaced samples. This is the expected probability
//!   for one piece of debris whose size is uniform over the range.
//! - [`DetectionModel::probability_union_of_ranges`] sums per-bin Poisson rates
//!   over a uniform size distribution and converts the total rate once. This is
//!   the probability of detecting anything from the whole population.

use log::debug;
use std::time::Duration;

use super::{
    fraction_to_percent, independent_union, percent_to_fraction, poisson_detection, SizeRange,
};
use crate::error::{DetectionError, Result};
use crate::model::DetectionModel;
use crate::units::{Length, LengthExt};

/// Steps used by the discrete range average (11 sample points)
pub const DEFAULT_INTERVAL_COUNT: usize = 10;

/// Bins used by the midpoint-rule union integral
pub const DEFAULT_BIN_COUNT: usize = 100;

impl DetectionModel {
    /// Average single-size probability over `range` using
    /// [`DEFAULT_INTERVAL_COUNT`] steps.
    pub fn probability_in_size_range(&self, range: &SizeRange, duration: Duration) -> Result<f64> {
        self.probability_in_size_range_with(range, duration, DEFAULT_INTERVAL_COUNT)
    }

    /// Average single-size probability over `interval_count + 1` evenly spaced
    /// sizes, both endpoints included.
    pub fn probability_in_size_range_with(
        &self,
        range: &SizeRange,
        duration: Duration,
        interval_count: usize,
    ) -> Result<f64> {
        if interval_count == 0 {
            return Err(DetectionError::InvalidSampleCount(interval_count));
        }

        let mut probability_sum = 0.0;
        for size in range.endpoint_samples(interval_count) {
            probability_sum += self.probability_debris_period(&size, duration)?;
        }
        let average = probability_sum / (interval_count + 1) as f64;

        debug!(
            "average over {} with {} intervals: {:.6}%",
            range, interval_count, average
        );
        Ok(average)
    }

    /// Probability of detecting any debris from a population uniformly
    /// distributed over `range`, using [`DEFAULT_BIN_COUNT`] bins.
    pub fn probability_union_of_ranges(
        &self,
        range: &SizeRange,
        duration: Duration,
    ) -> Result<f64> {
        self.probability_union_of_ranges_with(range, duration, DEFAULT_BIN_COUNT)
    }

    /// Midpoint-rule integral of the Poisson rate over `bin_count` equal bins.
    ///
    /// Each bin contributes `density * scan_volume(mid) * duration * (bin / range)`;
    /// independent Poisson rates add, so the total is converted to a
    /// probability once.
    pub fn probability_union_of_ranges_with(
        &self,
        range: &SizeRange,
        duration: Duration,
        bin_count: usize,
    ) -> Result<f64> {
        if bin_count == 0 {
            return Err(DetectionError::InvalidSampleCount(bin_count));
        }

        let bin_fraction = 1.0 / bin_count as f64;
        let mut lambda_total = 0.0;
        for size_mid in range.bin_midpoints(bin_count) {
            lambda_total += self.expected_detections(&size_mid, duration)? * bin_fraction;
        }
        let probability = fraction_to_percent(poisson_detection(lambda_total));

        debug!(
            "union over {} with {} bins: lambda = {:.6e}, P = {:.6}%",
            range, bin_count, lambda_total, probability
        );
        Ok(probability)
    }

    /// Probability of detecting debris between 1 cm and 10 cm.
    ///
    /// The [1 cm, 5 cm) and [5 cm, 10 cm) averages are treated as independent
    /// events and combined with `1 - (1 - P(A))(1 - P(B))`.
    pub fn one_to_ten_cm_probability(&self, duration: Duration) -> Result<f64> {
        let (first, second) = self.one_to_ten_cm_subranges(duration)?;
        Ok(fraction_to_percent(independent_union(
            percent_to_fraction(first),
            percent_to_fraction(second),
        )))
    }

    /// Range-averaged probabilities of the 1-5 cm and 5-10 cm subranges
    pub fn one_to_ten_cm_subranges(&self, duration: Duration) -> Result<(f64, f64)> {
        let one_cm = Length::from_centimeters(1.0);
        let five_cm = Length::from_centimeters(5.0);
        let ten_cm = Length::from_centimeters(10.0);

        let first = self.probability_in_size_range(&SizeRange::new(one_cm, five_cm)?, duration)?;
        let second = self.probability_in_size_range(&SizeRange::new(five_cm, ten_cm)?, duration)?;
        Ok((first, second))
    }
}
