//! Optical detection probability for orbital debris from a LEO small satellite
//!
//! This crate estimates how likely a wide-field camera on a small satellite is
//! to spot debris of a given size within an observation window. The model is
//! closed-form:
//!
//! 1. angular resolution of one pixel
//! 2. maximum range at which the debris still covers a pixel
//! 3. volume swept per second by the resolvable cone
//! 4. expected encounters for an assumed debris density (Poisson rate)
//! 5. probability of at least one detection
//!
//! ```
//! use debris_detection::{DetectionModel, SizeRange};
//! use std::time::Duration;
//!
//! let model = DetectionModel::reference();
//! let day = Duration::from_secs(86_400);
//! let range = SizeRange::from_meters(0.01, 0.1).unwrap();
//!
//! let union = model.probability_union_of_ranges(&range, day).unwrap();
//! assert!(union > 0.0 && union <= 100.0);
//! ```

pub mod config;
pub mod error;
pub mod hardware;
pub mod model;
pub mod probability;
pub mod report;
pub mod shared_args;
pub mod units;

// Re-exports for easier access
pub use config::{ObservationWindow, ScenarioConfig};
pub use error::{DetectionError, Result};
pub use hardware::{OrbitConfig, PixelGrid, SatelliteConfig, SensorConfig};
pub use model::DetectionModel;
pub use probability::{DebrisDensity, SizeRange};
pub use report::{DetectionReport, SampleCounts};
