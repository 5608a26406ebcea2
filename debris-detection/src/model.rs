//! Complete detection model: satellite geometry plus the debris environment

use serde::{Deserialize, Serialize};

use crate::error::{DetectionError, Result};
use crate::hardware::{
    orbit::models::CUBESAT_550KM, sensor::models::REFERENCE_24MP, OrbitConfig, SatelliteConfig,
    SensorConfig,
};
use crate::probability::{density::models::DENSITY_550KM, DebrisDensity};
use crate::units::Length;

/// Everything needed to turn a debris size and an observation window into a
/// detection probability.
///
/// Models are immutable once built and hold no shared state, so several
/// satellites or density assumptions can be evaluated side by side.
///
/// ```rust
/// use debris_detection::DetectionModel;
/// use debris_detection::units::{Length, LengthExt};
/// use std::time::Duration;
///
/// let model = DetectionModel::reference();
/// let p = model
///     .probability_debris_period(&Length::from_centimeters(1.0), Duration::from_secs(5700))
///     .unwrap();
/// assert!((p - 0.2542).abs() < 1e-3);
/// ```
///
/// The parts are only reachable read-only, so a validated model cannot be
/// turned into one with an empty pixel grid:
///
/// ```compile_fail
/// use debris_detection::{DetectionModel, PixelGrid};
///
/// let mut model = DetectionModel::reference();
/// model.satellite.sensor.pixel_grid = PixelGrid::LinearResolution(0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelParts", into = "ModelParts")]
pub struct DetectionModel {
    satellite: SatelliteConfig,
    density: DebrisDensity,
}

/// Serialized form; the satellite validates itself while deserializing
#[derive(Serialize, Deserialize)]
struct ModelParts {
    satellite: SatelliteConfig,
    density: DebrisDensity,
}

impl TryFrom<ModelParts> for DetectionModel {
    type Error = DetectionError;

    fn try_from(parts: ModelParts) -> Result<Self> {
        parts.density.validate()?;
        Ok(Self {
            satellite: parts.satellite,
            density: parts.density,
        })
    }
}

impl From<DetectionModel> for ModelParts {
    fn from(model: DetectionModel) -> Self {
        Self {
            satellite: model.satellite,
            density: model.density,
        }
    }
}

impl DetectionModel {
    /// Build a model from its parts, validating every invariant
    pub fn new(sensor: SensorConfig, orbit: OrbitConfig, density: DebrisDensity) -> Result<Self> {
        density.validate()?;
        Ok(Self {
            satellite: SatelliteConfig::new(sensor, orbit)?,
            density,
        })
    }

    /// 24 MP camera on a 550 km cubesat with the 550 km density estimate
    pub fn reference() -> Self {
        Self {
            satellite: SatelliteConfig::from_preset(REFERENCE_24MP.clone(), CUBESAT_550KM.clone()),
            density: DENSITY_550KM,
        }
    }

    /// Satellite geometry
    pub fn satellite(&self) -> &SatelliteConfig {
        &self.satellite
    }

    /// Assumed debris density
    pub fn density(&self) -> DebrisDensity {
        self.density
    }

    /// Same model with a different density assumption
    pub fn with_density(&self, density: DebrisDensity) -> Result<Self> {
        density.validate()?;
        Ok(Self {
            satellite: self.satellite.clone(),
            density,
        })
    }

    /// Angular resolution of the sensor in radians per pixel
    pub fn angular_resolution(&self) -> f64 {
        self.satellite.angular_resolution()
    }

    /// See [`SatelliteConfig::max_viewing_distance`]
    pub fn max_viewing_distance(&self, size: &Length) -> Result<Length> {
        self.satellite.max_viewing_distance(size)
    }

    /// See [`SatelliteConfig::scan_volume`]
    pub fn scan_volume(&self, size: &Length) -> Result<f64> {
        self.satellite.scan_volume(size)
    }
}
