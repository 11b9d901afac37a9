#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ride_core::pricing::FarePolicy;

/// Seeded RNG so sampled checks are reproducible.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Positive trip distances between a few yards and a long haul.
pub fn sample_positive_distances(rng: &mut StdRng, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.gen_range(0.01..500.0)).collect()
}

/// Zero and negative distances, including the demonstration's -5.0.
pub fn sample_non_positive_distances(rng: &mut StdRng, count: usize) -> Vec<f64> {
    let mut distances = vec![0.0, -0.0, -5.0];
    distances.extend((0..count).map(|_| -rng.gen_range(0.0001..500.0)));
    distances
}

/// Flat-rate variant used to show new policies plug in without touching actors.
#[derive(Debug)]
pub struct ShuttleFare;

impl FarePolicy for ShuttleFare {
    fn compute_fare(&self, _distance_miles: f64) -> f64 {
        10.0
    }

    fn label(&self) -> &str {
        "Shuttle"
    }
}
