//! Randomized sweeps over sizes and durations checking the model's invariants

use approx::assert_abs_diff_eq;
use debris_detection::probability::density::models::DENSITY_LOW;
use debris_detection::units::{Length, LengthExt};
use debris_detection::{DetectionModel, SizeRange};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const SAMPLES: usize = 500;

/// Random debris sizes (up to 1 m) and durations (up to 10 years)
struct InputRandomizer {
    rng: StdRng,
}

impl InputRandomizer {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn size(&mut self) -> Length {
        Length::from_meters(self.rng.gen::<f64>())
    }

    fn duration(&mut self) -> Duration {
        Duration::from_secs_f64(self.rng.gen::<f64>() * 10.0 * 31_536_000.0)
    }

    fn range(&mut self) -> SizeRange {
        let a = self.rng.gen::<f64>() * 0.5;
        let b = a + 1e-4 + self.rng.gen::<f64>() * 0.5;
        SizeRange::from_meters(a, b).unwrap()
    }
}

fn models() -> Vec<DetectionModel> {
    let reference = DetectionModel::reference();
    let low = reference.with_density(DENSITY_LOW).unwrap();
    vec![reference, low]
}

#[test]
fn test_probability_bounded() {
    let mut inputs = InputRandomizer::new(7);
    for model in models() {
        for _ in 0..SAMPLES {
            let (size, duration) = (inputs.size(), inputs.duration());
            let p = model.probability_debris_period(&size, duration).unwrap();
            assert!((0.0..=100.0).contains(&p), "P = {p} out of bounds");
        }
    }
}

#[test]
fn test_zero_size_or_duration_is_zero() {
    let mut inputs = InputRandomizer::new(11);
    let model = DetectionModel::reference();
    for _ in 0..SAMPLES {
        let p = model
            .probability_debris_period(&inputs.size(), Duration::ZERO)
            .unwrap();
        assert_eq!(p, 0.0);
        let p = model
            .probability_debris_period(&Length::from_meters(0.0), inputs.duration())
            .unwrap();
        assert_eq!(p, 0.0);
    }
}

#[test]
fn test_monotone_in_size_and_duration() {
    let mut inputs = InputRandomizer::new(42);
    let model = DetectionModel::reference();
    for _ in 0..SAMPLES {
        let (s1, s2) = (inputs.size(), inputs.size());
        let (small, large) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
        let (d1, d2) = (inputs.duration(), inputs.duration());
        let (short, long) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };

        let p_small = model.probability_debris_period(&small, short).unwrap();
        let p_large = model.probability_debris_period(&large, short).unwrap();
        assert!(p_large >= p_small);

        let p_short = model.probability_debris_period(&small, short).unwrap();
        let p_long = model.probability_debris_period(&small, long).unwrap();
        assert!(p_long >= p_short);
    }
}

#[test]
fn test_monotone_in_density() {
    let mut inputs = InputRandomizer::new(3);
    let high = DetectionModel::reference();
    let low = high.with_density(DENSITY_LOW).unwrap();
    for _ in 0..SAMPLES {
        let (size, duration) = (inputs.size(), inputs.duration());
        assert!(
            high.probability_debris_period(&size, duration).unwrap()
                >= low.probability_debris_period(&size, duration).unwrap()
        );
    }
}

#[test]
fn test_union_approaches_certainty() {
    let model = DetectionModel::reference();
    let range = SizeRange::from_meters(0.001, 0.002).unwrap();
    let mut previous = 0.0;
    for years in [1u64, 10, 100, 1000, 10_000] {
        let duration = Duration::from_secs(years * 31_536_000);
        let p = model.probability_union_of_ranges(&range, duration).unwrap();
        assert!(p >= previous);
        previous = p;
    }
    assert_abs_diff_eq!(previous, 100.0, epsilon = 1e-6);
}

#[test]
fn test_union_converges_with_bins() {
    let model = DetectionModel::reference();
    let range = SizeRange::from_meters(0.01, 0.1).unwrap();
    let duration = Duration::from_secs(86_400);

    let coarse = model
        .probability_union_of_ranges_with(&range, duration, 10)
        .unwrap();
    let fine = model
        .probability_union_of_ranges_with(&range, duration, 1_000)
        .unwrap();
    let finer = model
        .probability_union_of_ranges_with(&range, duration, 10_000)
        .unwrap();

    assert!((finer - fine).abs() < (fine - coarse).abs());
    assert_abs_diff_eq!(fine, finer, epsilon = 1e-4);
}

#[test]
fn test_average_converges_with_intervals() {
    let model = DetectionModel::reference();
    let range = SizeRange::from_meters(0.01, 0.1).unwrap();
    let duration = Duration::from_secs(86_400);

    let coarse = model
        .probability_in_size_range_with(&range, duration, 10)
        .unwrap();
    let fine = model
        .probability_in_size_range_with(&range, duration, 1_000)
        .unwrap();
    let finer = model
        .probability_in_size_range_with(&range, duration, 10_000)
        .unwrap();

    assert!((finer - fine).abs() < (fine - coarse).abs());
    assert_abs_diff_eq!(fine, finer, epsilon = 2e-2);
}

#[test]
fn test_two_subrange_union_bounds() {
    let mut inputs = InputRandomizer::new(99);
    let model = DetectionModel::reference();
    let mut durations: Vec<Duration> = (0..100).map(|_| inputs.duration() / 1000).collect();
    durations.extend([
        Duration::ZERO,
        Duration::from_secs(5700),
        Duration::from_secs(86_400),
    ]);

    for duration in durations {
        let union = model.one_to_ten_cm_probability(duration).unwrap();
        let (first, second) = model.one_to_ten_cm_subranges(duration).unwrap();
        assert!(union + 1e-9 >= first);
        assert!(union + 1e-9 >= second);
        assert!(union <= first + second + 1e-9);
    }
}

#[test]
fn test_random_ranges_are_bounded() {
    let mut inputs = InputRandomizer::new(1234);
    let model = DetectionModel::reference();
    for _ in 0..50 {
        let range = inputs.range();
        let duration = inputs.duration();
        let average = model.probability_in_size_range(&range, duration).unwrap();
        let union = model.probability_union_of_ranges(&range, duration).unwrap();
        assert!((0.0..=100.0).contains(&average));
        assert!((0.0..=100.0).contains(&union));
    }
}
