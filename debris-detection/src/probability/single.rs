//! Single-size Poisson detection probability

use log::{debug, warn};
use std::time::Duration;

use super::{fraction_to_percent, poisson_detection};
use crate::error::{DetectionError, Result};
use crate::model::DetectionModel;
use crate::units::{Length, LengthExt};

impl DetectionModel {
    /// Expected number of debris objects of `size` crossing the resolvable
    /// cone during `duration` (the Poisson rate λ).
    pub fn expected_detections(&self, size: &Length, duration: Duration) -> Result<f64> {
        let rate = self.scan_volume(size)?;
        Ok(self.density().per_km3() * rate * duration.as_secs_f64())
    }

    /// Probability of detecting debris of `size` during `duration`.
    ///
    /// Debris encounters are treated as a Poisson process, so the result is
    /// `1 - exp(-λ)` expressed as a percentage in [0, 100]. Zero size or zero
    /// duration give exactly 0.
    ///
    /// # Errors
    /// [`DetectionError::InvalidDebrisSize`] for negative or non-finite sizes.
    pub fn probability_debris_period(&self, size: &Length, duration: Duration) -> Result<f64> {
        let lambda = self.expected_detections(size, duration)?;
        let probability = fraction_to_percent(poisson_detection(lambda));

        debug!(
            "{:.4} m debris over {:.0} s: lambda = {:.6e}, P = {:.6}%",
            size.as_meters(),
            duration.as_secs_f64(),
            lambda,
            probability
        );
        if probability >= 100.0 {
            warn!(
                "detection probability saturated at 100% for {:.4} m debris over {:.0} s",
                size.as_meters(),
                duration.as_secs_f64()
            );
        }

        Ok(probability)
    }

    /// Observation time needed to reach `target_percent` detection probability
    /// for debris of `size`.
    ///
    /// Inverts the Poisson model: `t = -ln(1 - p) / (density * scan rate)`.
    ///
    /// # Errors
    /// - [`DetectionError::InvalidProbability`] if the target is outside [0, 100)
    /// - [`DetectionError::UnreachableProbability`] if the detection rate is zero
    ///   and the target is positive
    pub fn duration_for_probability(&self, size: &Length, target_percent: f64) -> Result<Duration> {
        if !(0.0..100.0).contains(&target_percent) {
            return Err(DetectionError::InvalidProbability(target_percent));
        }
        let rate_per_s = self.density().per_km3() * self.scan_volume(size)?;
        if target_percent == 0.0 {
            return Ok(Duration::ZERO);
        }
        if rate_per_s <= 0.0 {
            return Err(DetectionError::UnreachableProbability(target_percent));
        }

        let seconds = -(-target_percent / 100.0).ln_1p() / rate_per_s;
        Duration::try_from_secs_f64(seconds)
            .map_err(|_| DetectionError::UnreachableProbability(target_percent))
    }
}
