//! Debris detection probability calculator
//!
//! Prints the chance that the debris camera detects 1 mm to 10 cm debris within
//! one orbit, one day and one year, plus range-aggregated probabilities.
//!
//! Usage:
//! ```
//! cargo run --bin debris_probability -- [OPTIONS]
//! ```
//!
//! See --help for detailed options.

use anyhow::{Context, Result};
use clap::Parser;
use debris_detection::config::ScenarioConfig;
use debris_detection::shared_args::{ScenarioArgs, SizeRangeArg};
use debris_detection::units::{format_size, Length, LengthExt};
use debris_detection::{DebrisDensity, DetectionReport, ObservationWindow, SampleCounts};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Command line arguments for the debris probability calculator
#[derive(Parser, Debug)]
#[command(
    name = "Debris Probability",
    about = "Estimates the probability of optically detecting orbital debris from a LEO satellite",
    long_about = None
)]
struct Args {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Extra size range to evaluate, "min:max" in meters (repeatable)
    #[arg(long = "size-range")]
    size_ranges: Vec<SizeRangeArg>,

    /// Extra observation window in seconds (repeatable)
    #[arg(long = "duration")]
    durations: Vec<f64>,

    /// Report the observation time needed to reach this detection probability (%)
    #[arg(long)]
    target_probability: Option<f64>,

    /// Write results as CSV to this path
    #[arg(long)]
    output_csv: Option<PathBuf>,

    /// Write the resolved scenario as JSON to this path
    #[arg(long)]
    save_config: Option<PathBuf>,
}

fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let mut scenario = match &args.scenario.config {
        Some(path) => ScenarioConfig::load_from_file(path)
            .with_context(|| format!("Failed to load scenario from {}", path.display()))?,
        None => args.scenario.preset.to_scenario(),
    };

    if let Some(density) = args.scenario.density {
        scenario.density = DebrisDensity::new(density).context("Invalid --density")?;
    }
    scenario
        .ranges
        .extend(args.size_ranges.iter().map(|arg| arg.0));
    scenario.windows.extend(
        args.durations
            .iter()
            .map(|&seconds| ObservationWindow::new(format!("{seconds}s"), seconds)),
    );

    scenario.validate().context("Invalid scenario")?;
    Ok(scenario)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario = load_scenario(&args)?;
    info!(
        "Evaluating {} with density {:.3e}/km^3",
        scenario.sensor.name,
        scenario.density.per_km3()
    );

    if let Some(path) = &args.save_config {
        scenario
            .save_to_file(path)
            .with_context(|| format!("Failed to save scenario to {}", path.display()))?;
        info!("Saved scenario to {}", path.display());
    }

    let counts = SampleCounts {
        intervals: args.scenario.intervals,
        bins: args.scenario.bins,
    };
    let report = DetectionReport::build(&scenario, counts)?;
    report.print();

    if let Some(target) = args.target_probability {
        let model = scenario.model()?;
        println!();
        for &size_m in &scenario.sizes_m {
            let size = Length::from_meters(size_m);
            match model.duration_for_probability(&size, target) {
                Ok(duration) => println!(
                    "{:<10} reaches {target:.1}% after {:.1} s ({:.2} days)",
                    format_size(&size),
                    duration.as_secs_f64(),
                    duration.as_secs_f64() / 86_400.0
                ),
                Err(e) => println!("{:<10} {e}", format_size(&size)),
            }
        }
    }

    if let Some(path) = &args.output_csv {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        report
            .write_csv(BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Results written to {}", path.display());
    }

    Ok(())
}
