use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DetectionError, Result};
use crate::units::{format_size, Length, LengthExt};

/// Half-open interval of debris sizes, `0 <= min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSizeRange", into = "RawSizeRange")]
pub struct SizeRange {
    min: Length,
    max: Length,
}

impl SizeRange {
    /// Create a size range.
    ///
    /// Inverted (`min > max`), empty (`min == max`), negative and non-finite
    /// bounds are rejected rather than producing a negative-width computation.
    pub fn new(min: Length, max: Length) -> Result<Self> {
        let (min_m, max_m) = (min.as_meters(), max.as_meters());
        let valid = min_m.is_finite() && max_m.is_finite() && min_m >= 0.0 && min_m < max_m;
        if !valid {
            return Err(DetectionError::InvalidSizeRange { min_m, max_m });
        }
        Ok(Self { min, max })
    }

    /// Convenience constructor taking meters
    pub fn from_meters(min_m: f64, max_m: f64) -> Result<Self> {
        Self::new(Length::from_meters(min_m), Length::from_meters(max_m))
    }

    pub fn min(&self) -> Length {
        self.min
    }

    pub fn max(&self) -> Length {
        self.max
    }

    /// Width of the interval in meters
    pub fn width_m(&self) -> f64 {
        self.max.as_meters() - self.min.as_meters()
    }

    /// `count + 1` evenly spaced sizes covering both endpoints
    pub(crate) fn endpoint_samples(&self, count: usize) -> impl Iterator<Item = Length> + '_ {
        let step = self.width_m() / count as f64;
        let min_m = self.min.as_meters();
        (0..=count).map(move |i| Length::from_meters(min_m + i as f64 * step))
    }

    /// Midpoints of `count` equal-width bins
    pub(crate) fn bin_midpoints(&self, count: usize) -> impl Iterator<Item = Length> + '_ {
        let step = self.width_m() / count as f64;
        let min_m = self.min.as_meters();
        (0..count).map(move |i| Length::from_meters(min_m + (i as f64 + 0.5) * step))
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_size(&self.min), format_size(&self.max))
    }
}

/// Serialized form, bounds in meters
#[derive(Serialize, Deserialize)]
struct RawSizeRange {
    min_m: f64,
    max_m: f64,
}

impl TryFrom<RawSizeRange> for SizeRange {
    type Error = DetectionError;

    fn try_from(raw: RawSizeRange) -> Result<Self> {
        SizeRange::from_meters(raw.min_m, raw.max_m)
    }
}

impl From<SizeRange> for RawSizeRange {
    fn from(range: SizeRange) -> Self {
        Self {
            min_m: range.min.as_meters(),
            max_m: range.max.as_meters(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_valid_range() {
        let range = SizeRange::from_meters(0.01, 0.1).unwrap();
        assert_relative_eq!(range.width_m(), 0.09, epsilon = 1e-15);
        assert_eq!(range.to_string(), "1cm-10cm");
        let sub_mm = SizeRange::from_meters(0.0002, 0.0008).unwrap();
        assert_eq!(sub_mm.to_string(), "0.2mm-0.8mm");
    }

    #[test]
    fn test_swapped_range_rejected() {
        let err = SizeRange::from_meters(0.1, 0.01).unwrap_err();
        match err {
            DetectionError::InvalidSizeRange { min_m, max_m } => {
                assert_eq!(min_m, 0.1);
                assert_eq!(max_m, 0.01);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_degenerate_ranges_rejected() {
        assert!(SizeRange::from_meters(0.05, 0.05).is_err());
        assert!(SizeRange::from_meters(-0.01, 0.05).is_err());
        assert!(SizeRange::from_meters(0.0, f64::INFINITY).is_err());
        assert!(SizeRange::from_meters(f64::NAN, 0.05).is_err());
        assert!(SizeRange::from_meters(0.0, 0.05).is_ok());
    }

    #[test]
    fn test_endpoint_samples() {
        let range = SizeRange::from_meters(0.0, 1.0).unwrap();
        let samples: Vec<f64> = range.endpoint_samples(4).map(|l| l.as_meters()).collect();
        assert_eq!(samples.len(), 5);
        assert_relative_eq!(samples[0], 0.0);
        assert_relative_eq!(samples[2], 0.5);
        assert_relative_eq!(samples[4], 1.0);
    }

    #[test]
    fn test_bin_midpoints() {
        let range = SizeRange::from_meters(0.0, 1.0).unwrap();
        let mids: Vec<f64> = range.bin_midpoints(4).map(|l| l.as_meters()).collect();
        assert_eq!(mids.len(), 4);
        assert_relative_eq!(mids[0], 0.125);
        assert_relative_eq!(mids[3], 0.875);
    }

    #[test]
    fn test_serde_validates() {
        let range: SizeRange = serde_json::from_str(r#"{"min_m":0.01,"max_m":0.05}"#).unwrap();
        assert_relative_eq!(range.max().as_meters(), 0.05);
        assert!(serde_json::from_str::<SizeRange>(r#"{"min_m":0.05,"max_m":0.01}"#).is_err());
    }
}
