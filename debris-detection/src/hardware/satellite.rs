use log::debug;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{orbit::OrbitConfig, sensor::SensorConfig};
use crate::error::{DetectionError, Result};
use crate::units::{Length, LengthExt};

const CUBIC_METERS_PER_CUBIC_KM: f64 = 1000.0 * 1000.0 * 1000.0;

/// Satellite configuration combining the debris camera and the orbit it flies.
///
/// Provides the geometric half of the detection chain: how small an angle a
/// pixel resolves, how far away a piece of debris of a given size can still
/// be resolved, and how much volume the sensor cone sweeps per second.
///
/// # Geometry
///
/// - **Angular resolution**: diagonal FOV (radians) / pixels per side
/// - **Viewing distance**: d = size / angular resolution, the range where the
///   debris subtends exactly one pixel
/// - **Scan volume rate**: π (d tan(FOV/2))² · v, reported in km³/s
///
/// The cone half-angle comes from the sensor field of view while the angular
/// resolution uses the separate diagonal field of view. The two are kept as
/// independent parameters.
///
/// # Examples
///
/// ```rust
/// use debris_detection::hardware::{SatelliteConfig, orbit::models::CUBESAT_550KM};
/// use debris_detection::hardware::sensor::models::REFERENCE_24MP;
/// use debris_detection::units::{Length, LengthExt};
///
/// let satellite = SatelliteConfig::new(REFERENCE_24MP.clone(), CUBESAT_550KM.clone()).unwrap();
///
/// let range = satellite.max_viewing_distance(&Length::from_centimeters(1.0)).unwrap();
/// assert!((range.as_meters() - 26.984).abs() < 1e-3);
///
/// let rate = satellite.scan_volume(&Length::from_centimeters(1.0)).unwrap();
/// assert!(rate > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SatelliteParts", into = "SatelliteParts")]
pub struct SatelliteConfig {
    sensor: SensorConfig,
    orbit: OrbitConfig,
}

/// Serialized form, validated through [`SatelliteConfig::new`] on the way in
#[derive(Serialize, Deserialize)]
struct SatelliteParts {
    sensor: SensorConfig,
    orbit: OrbitConfig,
}

impl TryFrom<SatelliteParts> for SatelliteConfig {
    type Error = DetectionError;

    fn try_from(parts: SatelliteParts) -> Result<Self> {
        Self::new(parts.sensor, parts.orbit)
    }
}

impl From<SatelliteConfig> for SatelliteParts {
    fn from(satellite: SatelliteConfig) -> Self {
        Self {
            sensor: satellite.sensor,
            orbit: satellite.orbit,
        }
    }
}

impl SatelliteConfig {
    /// Create a new satellite configuration.
    ///
    /// Both parts are validated so every later computation can assume a
    /// non-empty pixel grid and a positive velocity.
    pub fn new(sensor: SensorConfig, orbit: OrbitConfig) -> Result<Self> {
        sensor.validate()?;
        orbit.validate()?;
        Ok(Self { sensor, orbit })
    }

    /// Presets are known-good and skip validation
    pub(crate) fn from_preset(sensor: SensorConfig, orbit: OrbitConfig) -> Self {
        Self { sensor, orbit }
    }

    /// Debris camera configuration
    pub fn sensor(&self) -> &SensorConfig {
        &self.sensor
    }

    /// Orbit configuration
    pub fn orbit(&self) -> &OrbitConfig {
        &self.orbit
    }

    /// Angular resolution of the sensor in radians per pixel
    pub fn angular_resolution(&self) -> f64 {
        self.sensor.angular_resolution()
    }

    /// Maximum range at which debris of `size` subtends one pixel.
    ///
    /// A zero size yields a zero range (never detectable).
    pub fn max_viewing_distance(&self, size: &Length) -> Result<Length> {
        let size_m = debris_size_meters(size)?;
        Ok(Length::from_meters(size_m / self.angular_resolution()))
    }

    /// Volume of space swept per second in which debris of `size` is resolvable.
    ///
    /// # Returns
    /// Scan volume rate in cubic kilometers per second
    pub fn scan_volume(&self, size: &Length) -> Result<f64> {
        let distance_m = self.max_viewing_distance(size)?.as_meters();
        let cone_radius_m = distance_m * self.sensor.half_fov_rad().tan();
        let rate_m3 = PI * cone_radius_m.powi(2) * self.orbit.velocity_km_s;
        let rate_km3 = rate_m3 / CUBIC_METERS_PER_CUBIC_KM;

        debug!(
            "scan volume for {:.4} m debris: range {:.2} m, cone radius {:.2} m, {:.6e} km^3/s",
            size.as_meters(),
            distance_m,
            cone_radius_m,
            rate_km3
        );

        Ok(rate_km3)
    }

    /// Generate a descriptive string for this satellite configuration
    ///
    /// # Example
    /// ```
    /// use debris_detection::hardware::{SatelliteConfig, orbit::models::CUBESAT_550KM};
    /// use debris_detection::hardware::sensor::models::REFERENCE_24MP;
    ///
    /// let satellite = SatelliteConfig::new(REFERENCE_24MP.clone(), CUBESAT_550KM.clone()).unwrap();
    /// assert_eq!(
    ///     satellite.description(),
    ///     "Reference 24MP (FOV 92.5°, diag 104.0°, 4898 px) on Cubesat 550km"
    /// );
    /// ```
    pub fn description(&self) -> String {
        format!(
            "{} (FOV {:.1}°, diag {:.1}°, {} px) on {}",
            self.sensor.name,
            self.sensor.field_of_view_deg,
            self.sensor.diagonal_fov_deg,
            self.sensor.pixels_per_side(),
            self.orbit.name
        )
    }
}

/// Debris size in meters, rejecting negative and non-finite values.
pub(crate) fn debris_size_meters(size: &Length) -> Result<f64> {
    let size_m = size.as_meters();
    if size_m.is_finite() && size_m >= 0.0 {
        Ok(size_m)
    } else {
        Err(DetectionError::InvalidDebrisSize { size_m })
    }
}
