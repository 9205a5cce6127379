//! Synthetic training data for the risk estimator.
//!
//! Stand-in for historical sensor records: every evaluation regenerates a
//! fresh random table and discards it afterwards. Labels are random, so the
//! fitted estimator carries no real signal; the table exists only to give
//! the estimator something to fit.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One synthetic observation: weather features plus a random binary label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRow {
    /// Rainfall in millimeters, drawn from [0, 100).
    pub rainfall_mm: u32,
    /// Soil moisture in percent, drawn from [20, 100).
    pub soil_moisture_pct: u32,
    /// Elevation in meters, drawn from [0, 50).
    pub elevation_m: u32,
    /// Random "flood occurred" label with no real-world meaning.
    pub label: bool,
}

impl SampleRow {
    /// Feature vector in training column order: rainfall, moisture,
    /// elevation.
    pub fn features(&self) -> [f64; 3] {
        [
            f64::from(self.rainfall_mm),
            f64::from(self.soil_moisture_pct),
            f64::from(self.elevation_m),
        ]
    }
}

/// Generate `rows` fresh random sample rows from the given RNG.
pub fn generate_training_set(rng: &mut impl Rng, rows: usize) -> Vec<SampleRow> {
    (0..rows)
        .map(|_| SampleRow {
            rainfall_mm: rng.gen_range(0..100),
            soil_moisture_pct: rng.gen_range(20..100),
            elevation_m: rng.gen_range(0..50),
            label: rng.gen_bool(0.5),
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_row_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(generate_training_set(&mut rng, 50).len(), 50);
    }

    #[test]
    fn test_generated_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for row in generate_training_set(&mut rng, 500) {
            assert!(row.rainfall_mm < 100);
            assert!((20..100).contains(&row.soil_moisture_pct));
            assert!(row.elevation_m < 50);
        }
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(
            generate_training_set(&mut a, 50),
            generate_training_set(&mut b, 50)
        );
    }

    #[test]
    fn test_both_labels_occur() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let rows = generate_training_set(&mut rng, 200);
        assert!(rows.iter().any(|r| r.label));
        assert!(rows.iter().any(|r| !r.label));
    }

    #[test]
    fn test_features_column_order() {
        let row = SampleRow {
            rainfall_mm: 1,
            soil_moisture_pct: 2,
            elevation_m: 3,
            label: false,
        };
        assert_eq!(row.features(), [1.0, 2.0, 3.0]);
    }
}
