//! Type-safe lengths for debris sizes and viewing distances
//!
//! Debris sizes travel through the model as `uom` lengths so that a size given
//! in centimeters can never be mistaken for one given in meters.

use uom::si::length::{centimeter, kilometer, meter, millimeter};

/// Type alias for length measurements with convenient methods
pub type Length = uom::si::f64::Length;

/// Extension trait for the length scales used when talking about debris
pub trait LengthExt {
    /// Create length from millimeters
    fn from_millimeters(mm: f64) -> Self;

    /// Get length in millimeters
    fn as_millimeters(&self) -> f64;

    /// Create length from centimeters
    fn from_centimeters(cm: f64) -> Self;

    /// Get length in centimeters
    fn as_centimeters(&self) -> f64;

    /// Create length from meters
    fn from_meters(m: f64) -> Self;

    /// Get length in meters
    fn as_meters(&self) -> f64;

    /// Get length in kilometers
    fn as_kilometers(&self) -> f64;
}

impl LengthExt for Length {
    fn from_millimeters(mm: f64) -> Self {
        Length::new::<millimeter>(mm)
    }

    fn as_millimeters(&self) -> f64 {
        self.get::<millimeter>()
    }

    fn from_centimeters(cm: f64) -> Self {
        Length::new::<centimeter>(cm)
    }

    fn as_centimeters(&self) -> f64 {
        self.get::<centimeter>()
    }

    fn from_meters(m: f64) -> Self {
        Length::new::<meter>(m)
    }

    fn as_meters(&self) -> f64 {
        self.get::<meter>()
    }

    fn as_kilometers(&self) -> f64 {
        self.get::<kilometer>()
    }
}

/// Human-friendly rendering of a debris size, picking mm/cm/m by magnitude.
///
/// Up to two decimals are kept and trailing zeros dropped, so 1.5 cm prints
/// as `1.5cm` and 1 cm as `1cm`.
pub fn format_size(size: &Length) -> String {
    let m = size.as_meters();
    if m < 0.01 {
        with_unit(size.as_millimeters(), "mm")
    } else if m < 1.0 {
        with_unit(size.as_centimeters(), "cm")
    } else {
        with_unit(m, "m")
    }
}

fn with_unit(value: f64, unit: &str) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}{unit}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_conversions() {
        let debris = Length::from_millimeters(1.0);
        assert_relative_eq!(debris.as_meters(), 0.001, epsilon = 1e-12);
        assert_relative_eq!(debris.as_centimeters(), 0.1, epsilon = 1e-12);

        let debris = Length::from_centimeters(5.0);
        assert_relative_eq!(debris.as_meters(), 0.05, epsilon = 1e-12);
        assert_relative_eq!(debris.as_millimeters(), 50.0, epsilon = 1e-9);

        let range = Length::from_meters(26_984.0);
        assert_relative_eq!(range.as_kilometers(), 26.984, epsilon = 1e-9);
    }

    #[test]
    fn test_length_ordering() {
        let one_mm = Length::from_millimeters(1.0);
        let one_cm = Length::from_centimeters(1.0);
        let ten_cm = Length::from_centimeters(10.0);
        assert!(one_mm < one_cm);
        assert!(one_cm < ten_cm);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(&Length::from_millimeters(1.0)), "1mm");
        assert_eq!(format_size(&Length::from_centimeters(1.0)), "1cm");
        assert_eq!(format_size(&Length::from_centimeters(10.0)), "10cm");
        assert_eq!(format_size(&Length::from_meters(2.5)), "2.5m");
        assert_eq!(format_size(&Length::from_meters(0.0)), "0mm");
    }

    #[test]
    fn test_format_size_keeps_fractions() {
        assert_eq!(format_size(&Length::from_meters(0.015)), "1.5cm");
        assert_eq!(format_size(&Length::from_millimeters(0.4)), "0.4mm");
        assert_eq!(format_size(&Length::from_millimeters(0.25)), "0.25mm");
        assert_ne!(
            format_size(&Length::from_millimeters(0.2)),
            format_size(&Length::from_millimeters(0.8))
        );
    }
}
