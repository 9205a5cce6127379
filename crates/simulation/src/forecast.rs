//! Fabricated 7-day risk outlook.
//!
//! The series is noise: normal draws centered on the current predicted risk
//! percentage, clamped to [0, 100] and paired with consecutive calendar
//! dates. It carries no predictive semantics and exists only to fill the
//! outlook chart.

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::config::{FORECAST_DAYS, FORECAST_NOISE_STD};

/// One dated point of the outlook series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    /// Risk percentage, clamped to [0, 100].
    pub risk_pct: f32,
}

/// First day of the fabricated outlook window.
pub fn forecast_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).expect("start date is a valid calendar date")
}

/// Sample the outlook series: `FORECAST_DAYS` normal draws around
/// `center_pct` with `FORECAST_NOISE_STD` spread, clamped to [0, 100].
pub fn forecast_series(center_pct: f32, rng: &mut impl Rng) -> Vec<ForecastPoint> {
    let noise = Normal::new(f64::from(center_pct), FORECAST_NOISE_STD)
        .expect("noise spread is finite and positive");
    let start = forecast_start_date();

    (0..FORECAST_DAYS)
        .map(|day| ForecastPoint {
            date: start + Duration::days(day as i64),
            risk_pct: (noise.sample(rng) as f32).clamp(0.0, 100.0),
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
    fn test_series_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert_eq!(forecast_series(50.0, &mut rng).len(), FORECAST_DAYS);
    }

    #[test]
    fn test_dates_are_consecutive_from_start() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let series = forecast_series(50.0, &mut rng);
        for (day, point) in series.iter().enumerate() {
            assert_eq!(
                point.date,
                forecast_start_date() + Duration::days(day as i64)
            );
        }
    }

    #[test]
    fn test_values_clamped_to_percentage_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        // Centers at the extremes force draws beyond the range before clamping.
        for center in [0.0, 1.0, 50.0, 99.0, 100.0] {
            for point in forecast_series(center, &mut rng) {
                assert!((0.0..=100.0).contains(&point.risk_pct), "{}", point.risk_pct);
            }
        }
    }

    #[test]
    fn test_series_is_deterministic_per_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(21);
        let mut b = ChaCha8Rng::seed_from_u64(21);
        assert_eq!(forecast_series(63.0, &mut a), forecast_series(63.0, &mut b));
    }

    #[test]
    fn test_series_tracks_center() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let series = forecast_series(80.0, &mut rng);
        let mean: f32 =
            series.iter().map(|p| p.risk_pct).sum::<f32>() / series.len() as f32;
        // 7 draws with sigma 5 keep the sample mean within a few points.
        assert!((mean - 80.0).abs() < 10.0, "mean={mean}");
    }
}
