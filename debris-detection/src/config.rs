use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{DetectionError, Result};
use crate::hardware::{
    orbit::models::CUBESAT_550KM, sensor::models::REFERENCE_24MP, OrbitConfig, SensorConfig,
};
use crate::model::DetectionModel;
use crate::probability::{density::models::DENSITY_550KM, DebrisDensity, SizeRange};

/// Seconds in one ~95 minute orbit at 550 km
pub const ONE_ORBIT_S: f64 = 5700.0;
pub const ONE_DAY_S: f64 = 86_400.0;
pub const ONE_YEAR_S: f64 = 31_536_000.0;

/// Observation window with a label for reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationWindow {
    pub label: String,
    pub seconds: f64,
}

impl ObservationWindow {
    pub fn new(label: impl Into<String>, seconds: f64) -> Self {
        Self {
            label: label.into(),
            seconds,
        }
    }

    /// Window length, rejecting negative and non-finite values
    pub fn duration(&self) -> Result<Duration> {
        Duration::try_from_secs_f64(self.seconds).map_err(|_| {
            DetectionError::InvalidConfig(format!(
                "observation window '{}' must be a non-negative number of seconds, got {}",
                self.label, self.seconds
            ))
        })
    }
}

/// A detection study: the model parameters plus the sizes, windows and ranges
/// to evaluate.
///
/// Stored as JSON so studies for different satellites can be kept side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub sensor: SensorConfig,
    pub orbit: OrbitConfig,
    /// Debris per km³
    pub density: DebrisDensity,
    /// Debris sizes to tabulate, in meters
    #[serde(default = "default_sizes_m")]
    pub sizes_m: Vec<f64>,
    #[serde(default = "default_windows")]
    pub windows: Vec<ObservationWindow>,
    #[serde(default = "default_ranges")]
    pub ranges: Vec<SizeRange>,
}

fn default_sizes_m() -> Vec<f64> {
    vec![0.001, 0.01, 0.05, 0.1]
}

fn default_windows() -> Vec<ObservationWindow> {
    vec![
        ObservationWindow::new("one orbit", ONE_ORBIT_S),
        ObservationWindow::new("one day", ONE_DAY_S),
        ObservationWindow::new("one year", ONE_YEAR_S),
    ]
}

fn default_ranges() -> Vec<SizeRange> {
    [(0.001, 0.01), (0.01, 0.1), (0.05, 0.1)]
        .into_iter()
        .filter_map(|(min, max)| SizeRange::from_meters(min, max).ok())
        .collect()
}

impl ScenarioConfig {
    /// The 550 km cubesat study with the standard sizes and windows
    pub fn reference() -> Self {
        Self {
            sensor: REFERENCE_24MP.clone(),
            orbit: CUBESAT_550KM.clone(),
            density: DENSITY_550KM,
            sizes_m: default_sizes_m(),
            windows: default_windows(),
            ranges: default_ranges(),
        }
    }

    /// Build the validated detection model for this scenario
    pub fn model(&self) -> Result<DetectionModel> {
        DetectionModel::new(self.sensor.clone(), self.orbit.clone(), self.density)
    }

    /// Check the model parameters and every size and window
    pub fn validate(&self) -> Result<()> {
        self.model()?;
        for &size_m in &self.sizes_m {
            if !(size_m.is_finite() && size_m >= 0.0) {
                return Err(DetectionError::InvalidDebrisSize { size_m });
            }
        }
        for window in &self.windows {
            window.duration()?;
        }
        Ok(())
    }

    /// Save to JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from JSON file and validate
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let scenario: Self = serde_json::from_str(&json)?;
        scenario.validate()?;
        Ok(scenario)
    }
}
