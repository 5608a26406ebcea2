//! Orbit parameters relevant to the swept scan volume

use serde::{Deserialize, Serialize};

use crate::error::{DetectionError, Result};

/// Orbit of the host satellite.
///
/// Only the ground-relative velocity matters: it sets how fast the sensor's
/// detection cone sweeps through the debris field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Orbit name or identifier
    pub name: String,
    /// Ground-relative velocity of the satellite
    pub velocity_km_s: f64,
}

impl OrbitConfig {
    /// Create a new orbit configuration
    pub fn new(name: impl Into<String>, velocity_km_s: f64) -> Result<Self> {
        let orbit = Self {
            name: name.into(),
            velocity_km_s,
        };
        orbit.validate()?;
        Ok(orbit)
    }

    /// Velocity must be finite and strictly positive
    pub fn validate(&self) -> Result<()> {
        if self.velocity_km_s.is_finite() && self.velocity_km_s > 0.0 {
            Ok(())
        } else {
            Err(DetectionError::InvalidConfig(format!(
                "orbit {} velocity must be positive, got {}",
                self.name, self.velocity_km_s
            )))
        }
    }
}

/// Standard orbits
pub mod models {
    use super::*;
    use once_cell::sync::Lazy;

    /// Cubesat in a 550 km circular orbit
    pub static CUBESAT_550KM: Lazy<OrbitConfig> = Lazy::new(|| OrbitConfig {
        name: "Cubesat 550km".to_string(),
        velocity_km_s: 6700.0,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_is_valid() {
        assert!(models::CUBESAT_550KM.validate().is_ok());
        assert_eq!(models::CUBESAT_550KM.velocity_km_s, 6700.0);
    }

    #[test]
    fn test_non_positive_velocity_rejected() {
        assert!(OrbitConfig::new("Parked", 0.0).is_err());
        assert!(OrbitConfig::new("Backwards", -7.6).is_err());
        assert!(OrbitConfig::new("Warp", f64::INFINITY).is_err());
        assert!(OrbitConfig::new("LEO", 7.6).is_ok());
    }
}
