use serde::{Deserialize, Serialize};

use crate::error::{DetectionError, Result};

/// Average number of debris objects per cubic kilometer at the reference altitude.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DebrisDensity(f64);

impl DebrisDensity {
    /// Create a density, rejecting negative and non-finite values
    pub fn new(per_km3: f64) -> Result<Self> {
        let density = Self(per_km3);
        density.validate()?;
        Ok(density)
    }

    pub fn validate(&self) -> Result<()> {
        if self.0.is_finite() && self.0 >= 0.0 {
            Ok(())
        } else {
            Err(DetectionError::InvalidConfig(format!(
                "debris density must be non-negative, got {}",
                self.0
            )))
        }
    }

    /// Density in objects per km³
    pub fn per_km3(&self) -> f64 {
        self.0
    }
}

/// Standard density assumptions
pub mod models {
    use super::DebrisDensity;

    /// Average debris density at a 550 km orbit
    pub const DENSITY_550KM: DebrisDensity = DebrisDensity(2.67e-5);

    /// Conservative lower density estimate
    pub const DENSITY_LOW: DebrisDensity = DebrisDensity(1e-5);
}
