//! Tabulated detection results for a scenario

use std::io::Write;

use crate::config::ScenarioConfig;
use crate::error::Result;
use crate::model::DetectionModel;
use crate::probability::{SizeRange, DEFAULT_BIN_COUNT, DEFAULT_INTERVAL_COUNT};
use crate::units::{format_size, Length, LengthExt};

/// Detection result for one debris size over one observation window
#[derive(Debug, Clone)]
pub struct SizeRow {
    pub size: Length,
    pub window: String,
    pub seconds: f64,
    pub max_distance_m: f64,
    pub expected_detections: f64,
    pub probability: f64,
}

/// Aggregated results for one size range over one observation window
#[derive(Debug, Clone)]
pub struct RangeRow {
    pub range: SizeRange,
    pub window: String,
    pub seconds: f64,
    /// Discrete average of the single-size probability
    pub average: f64,
    /// Union probability from the summed Poisson rate
    pub union: f64,
}

/// All rows produced for a scenario
#[derive(Debug, Clone)]
pub struct DetectionReport {
    pub description: String,
    pub sizes: Vec<SizeRow>,
    pub ranges: Vec<RangeRow>,
    /// 1-10 cm two-subrange union per window
    pub one_to_ten_cm: Vec<(String, f64)>,
}

/// Sample counts used for the range aggregations
#[derive(Debug, Clone, Copy)]
pub struct SampleCounts {
    pub intervals: usize,
    pub bins: usize,
}

impl Default for SampleCounts {
    fn default() -> Self {
        Self {
            intervals: DEFAULT_INTERVAL_COUNT,
            bins: DEFAULT_BIN_COUNT,
        }
    }
}

impl DetectionReport {
    /// Evaluate every size, range and window in `scenario`
    pub fn build(scenario: &ScenarioConfig, counts: SampleCounts) -> Result<Self> {
        scenario.validate()?;
        let model: DetectionModel = scenario.model()?;

        let mut sizes = Vec::new();
        for window in &scenario.windows {
            let duration = window.duration()?;
            for &size_m in &scenario.sizes_m {
                let size = Length::from_meters(size_m);
                sizes.push(SizeRow {
                    size,
                    window: window.label.clone(),
                    seconds: window.seconds,
                    max_distance_m: model.max_viewing_distance(&size)?.as_meters(),
                    expected_detections: model.expected_detections(&size, duration)?,
                    probability: model.probability_debris_period(&size, duration)?,
                });
            }
        }

        let mut ranges = Vec::new();
        let mut one_to_ten_cm = Vec::new();
        for window in &scenario.windows {
            let duration = window.duration()?;
            for range in &scenario.ranges {
                ranges.push(RangeRow {
                    range: *range,
                    window: window.label.clone(),
                    seconds: window.seconds,
                    average: model.probability_in_size_range_with(
                        range,
                        duration,
                        counts.intervals,
                    )?,
                    union: model.probability_union_of_ranges_with(range, duration, counts.bins)?,
                });
            }
            one_to_ten_cm.push((
                window.label.clone(),
                model.one_to_ten_cm_probability(duration)?,
            ));
        }

        Ok(Self {
            description: model.satellite().description(),
            sizes,
            ranges,
            one_to_ten_cm,
        })
    }

    /// Print the report as aligned text tables
    pub fn print(&self) {
        println!("{}", self.description);
        println!();
        println!(
            "{:<10} {:<12} {:>16} {:>18} {:>16}",
            "Size", "Window", "Max range (m)", "Expected count", "Probability %"
        );
        println!("{:-<76}", "");
        for row in &self.sizes {
            println!(
                "{:<10} {:<12} {:>16.2} {:>18.6e} {:>16.6}",
                format_size(&row.size),
                row.window,
                row.max_distance_m,
                row.expected_detections,
                row.probability
            );
        }

        println!();
        println!(
            "{:<12} {:<12} {:>16} {:>16}",
            "Range", "Window", "Average %", "Union %"
        );
        println!("{:-<59}", "");
        for row in &self.ranges {
            println!(
                "{:<12} {:<12} {:>16.6} {:>16.6}",
                row.range.to_string(),
                row.window,
                row.average,
                row.union
            );
        }

        println!();
        for (window, probability) in &self.one_to_ten_cm {
            println!("1cm-10cm (two subranges) within {window}: {probability:.6}%");
        }
    }

    /// Write size and range rows as CSV, flushing `out` before returning.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(out);
        wtr.write_record([
            "kind",
            "size_min_m",
            "size_max_m",
            "window",
            "seconds",
            "expected_detections",
            "probability_pct",
            "union_pct",
        ])?;
        for row in &self.sizes {
            let size_m = row.size.as_meters().to_string();
            wtr.write_record([
                "size".to_string(),
                size_m.clone(),
                size_m,
                row.window.clone(),
                row.seconds.to_string(),
                row.expected_detections.to_string(),
                row.probability.to_string(),
                String::new(),
            ])?;
        }
        for row in &self.ranges {
            wtr.write_record([
                "range".to_string(),
                row.range.min().as_meters().to_string(),
                row.range.max().as_meters().to_string(),
                row.window.clone(),
                row.seconds.to_string(),
                String::new(),
                row.average.to_string(),
                row.union.to_string(),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }
}
