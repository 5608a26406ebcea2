//! Hardware module for sensor, orbit and satellite configurations

pub mod orbit;
pub mod satellite;
pub mod sensor;

pub use orbit::OrbitConfig;
pub use satellite::SatelliteConfig;
pub use sensor::{PixelGrid, SensorConfig};
