//! Sensor configuration for the debris-spotting camera

use serde::{Deserialize, Serialize};

use crate::error::{DetectionError, Result};

/// How the sensor's pixel grid is declared.
///
/// Datasheets give either a total megapixel count (assumed to be a square
/// grid) or a linear resolution along one side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelGrid {
    /// Total pixel count in megapixels
    Megapixels(f64),
    /// Pixels along one side of a square grid
    LinearResolution(u32),
}

impl PixelGrid {
    /// Pixels along one side of the grid.
    ///
    /// A megapixel count is converted to the side length of the largest
    /// square grid it can fill (integer square root, truncated).
    pub fn pixels_per_side(&self) -> u32 {
        match *self {
            PixelGrid::Megapixels(mp) => {
                if mp.is_finite() && mp > 0.0 {
                    (mp * 1e6).sqrt().floor() as u32
                } else {
                    0
                }
            }
            PixelGrid::LinearResolution(px) => px,
        }
    }
}

/// Configuration for the sensor detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Name/model of the sensor
    pub name: String,
    /// Full cone angle of the imaging field in degrees
    pub field_of_view_deg: f64,
    /// Field of view across the pixel-grid diagonal in degrees
    pub diagonal_fov_deg: f64,
    /// Pixel grid declaration
    pub pixel_grid: PixelGrid,
}

impl SensorConfig {
    /// Create a new sensor configuration, rejecting physically invalid values.
    pub fn new(
        name: impl Into<String>,
        field_of_view_deg: f64,
        diagonal_fov_deg: f64,
        pixel_grid: PixelGrid,
    ) -> Result<Self> {
        let sensor = Self {
            name: name.into(),
            field_of_view_deg,
            diagonal_fov_deg,
            pixel_grid,
        };
        sensor.validate()?;
        Ok(sensor)
    }

    /// Check the sensor invariants: both angles in (0°, 180°) and a non-empty grid.
    pub fn validate(&self) -> Result<()> {
        check_angle("field of view", self.field_of_view_deg)?;
        check_angle("diagonal field of view", self.diagonal_fov_deg)?;
        if self.pixel_grid.pixels_per_side() == 0 {
            return Err(DetectionError::InvalidConfig(format!(
                "sensor {} resolves to zero pixels per side ({:?})",
                self.name, self.pixel_grid
            )));
        }
        Ok(())
    }

    /// Pixels along one side of the sensor
    pub fn pixels_per_side(&self) -> u32 {
        self.pixel_grid.pixels_per_side()
    }

    /// Angular size subtended by one pixel, in radians.
    ///
    /// The diagonal field of view is spread across the side pixel count.
    pub fn angular_resolution(&self) -> f64 {
        self.diagonal_fov_deg.to_radians() / self.pixels_per_side() as f64
    }

    /// Half-angle of the imaging cone, in radians
    pub fn half_fov_rad(&self) -> f64 {
        (self.field_of_view_deg / 2.0).to_radians()
    }
}

fn check_angle(what: &str, deg: f64) -> Result<()> {
    if deg.is_finite() && deg > 0.0 && deg < 180.0 {
        Ok(())
    } else {
        Err(DetectionError::InvalidConfig(format!(
            "{what} must be in (0, 180) degrees, got {deg}"
        )))
    }
}

/// Standard sensor models
pub mod models {
    use super::*;
    use once_cell::sync::Lazy;

    /// 24 megapixel wide-field camera used for the 550 km debris study
    pub static REFERENCE_24MP: Lazy<SensorConfig> = Lazy::new(|| SensorConfig {
        name: "Reference 24MP".to_string(),
        field_of_view_deg: 92.5,
        diagonal_fov_deg: 104.0,
        pixel_grid: PixelGrid::Megapixels(24.0),
    });

    /// Same optics as [`REFERENCE_24MP`], declared by a fixed 4096 px side
    pub static REFERENCE_4K_LINEAR: Lazy<SensorConfig> = Lazy::new(|| SensorConfig {
        name: "Reference 4K linear".to_string(),
        field_of_view_deg: 92.5,
        diagonal_fov_deg: 104.0,
        pixel_grid: PixelGrid::LinearResolution(4096),
    });

    /// All predefined sensors
    pub static ALL_SENSORS: Lazy<Vec<SensorConfig>> =
        Lazy::new(|| vec![REFERENCE_24MP.clone(), REFERENCE_4K_LINEAR.clone()]);
}
