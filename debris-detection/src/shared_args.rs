//! Command-line arguments and presets for the detection tools

use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::ScenarioConfig;
use crate::hardware::sensor::models::REFERENCE_4K_LINEAR;
use crate::probability::density::models::DENSITY_LOW;
use crate::probability::SizeRange;

/// Predefined scenario presets
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum Preset {
    /// 24 MP camera, 550 km density of 2.67e-5 per km³ - Default
    Reference,
    /// Fixed 4096 px linear resolution sensor
    Linear4k,
    /// Reference camera with the 1e-5 per km³ density estimate
    LowDensity,
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Reference => write!(f, "reference"),
            Preset::Linear4k => write!(f, "linear4k"),
            Preset::LowDensity => write!(f, "low-density"),
        }
    }
}

impl Preset {
    /// Scenario for the selected preset
    pub fn to_scenario(&self) -> ScenarioConfig {
        let mut scenario = ScenarioConfig::reference();
        match self {
            Preset::Reference => {}
            Preset::Linear4k => scenario.sensor = REFERENCE_4K_LINEAR.clone(),
            Preset::LowDensity => scenario.density = DENSITY_LOW,
        }
        scenario
    }
}

/// Parse a size range in meters given as "min:max"
pub fn parse_size_range(s: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 {
        return Err("Size range must be in format 'min:max' (meters)".to_string());
    }

    let min = parts[0]
        .trim()
        .parse::<f64>()
        .map_err(|_| "Invalid minimum size".to_string())?;
    let max = parts[1]
        .trim()
        .parse::<f64>()
        .map_err(|_| "Invalid maximum size".to_string())?;

    if min < 0.0 {
        return Err("Minimum size cannot be negative".to_string());
    }
    if min >= max {
        return Err("Minimum size must be less than maximum size".to_string());
    }

    Ok((min, max))
}

/// Clap-compatible wrapper around a validated [`SizeRange`]
#[derive(Debug, Clone, Copy)]
pub struct SizeRangeArg(pub SizeRange);

impl FromStr for SizeRangeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = parse_size_range(s)?;
        SizeRange::from_meters(min, max)
            .map(SizeRangeArg)
            .map_err(|e| e.to_string())
    }
}

impl fmt::Display for SizeRangeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scenario selection shared by the detection binaries
#[derive(Parser, Debug, Clone)]
pub struct ScenarioArgs {
    /// Built-in scenario to evaluate
    #[arg(long, value_enum, default_value_t = Preset::Reference)]
    pub preset: Preset,

    /// JSON scenario file (overrides --preset)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the debris density in objects per km³
    #[arg(long)]
    pub density: Option<f64>,

    /// Number of steps for the discrete range average
    #[arg(long, default_value_t = crate::probability::DEFAULT_INTERVAL_COUNT)]
    pub intervals: usize,

    /// Number of bins for the range union integral
    #[arg(long, default_value_t = crate::probability::DEFAULT_BIN_COUNT)]
    pub bins: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probability::density::models::DENSITY_550KM;

    #[test]
    fn test_parse_size_range() {
        assert_eq!(parse_size_range("0.01:0.1"), Ok((0.01, 0.1)));
        assert_eq!(parse_size_range(" 0 : 0.05 "), Ok((0.0, 0.05)));
        assert!(parse_size_range("0.1:0.01").is_err());
        assert!(parse_size_range("0.1").is_err());
        assert!(parse_size_range("-0.1:0.5").is_err());
        assert!(parse_size_range("a:b").is_err());
    }

    #[test]
    fn test_size_range_arg() {
        let arg: SizeRangeArg = "0.01:0.1".parse().unwrap();
        assert_eq!(arg.to_string(), "1cm-10cm");
        assert!("0.05:0.05".parse::<SizeRangeArg>().is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(Preset::Reference.to_scenario(), ScenarioConfig::reference());
        assert_eq!(Preset::LowDensity.to_scenario().density, DENSITY_LOW);
        assert_eq!(Preset::Linear4k.to_scenario().density, DENSITY_550KM);
        assert_eq!(
            Preset::Linear4k.to_scenario().sensor.pixels_per_side(),
            4096
        );
    }

    #[test]
    fn test_scenario_args_parse() {
        let args = ScenarioArgs::parse_from(["test", "--preset", "low-density", "--bins", "200"]);
        assert_eq!(args.preset, Preset::LowDensity);
        assert_eq!(args.bins, 200);
        assert_eq!(args.intervals, 10);
        assert!(args.config.is_none());
    }
}
