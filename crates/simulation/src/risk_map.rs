//! Random map sample points and their per-point risk classification.
//!
//! Every evaluation scatters a fixed number of points around the map
//! center, draws each one a random elevation and probability score, then
//! applies the flagging rule and tier ladder from [`crate::risk`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{MARKER_JITTER_DEG, NUM_SAMPLE_POINTS};
use crate::geo::{MAP_CENTER_LAT, MAP_CENTER_LON};
use crate::inputs::ScenarioInputs;
use crate::risk::{classify, is_flagged, RiskTier};

/// One random map sample with its derived risk classification.
///
/// Invariant: `tier` is `RiskTier::None` unless `flagged`; when flagged it
/// is a strict function of `probability_pct`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskPoint {
    pub id: u32,
    /// Point elevation in meters, drawn from [0, 50).
    pub elevation_m: f32,
    /// Random probability score in [50, 95), used only for tiering.
    pub probability_pct: f32,
    pub flagged: bool,
    pub tier: RiskTier,
    /// Latitude (degrees north), within the jitter window of the center.
    pub lat: f64,
    /// Longitude (degrees east), within the jitter window of the center.
    pub lon: f64,
}

/// Scatter `NUM_SAMPLE_POINTS` fresh random points and classify each one
/// against the current slider inputs.
pub fn generate_risk_points(inputs: &ScenarioInputs, rng: &mut impl Rng) -> Vec<RiskPoint> {
    (0..NUM_SAMPLE_POINTS)
        .map(|id| {
            let elevation_m = rng.gen_range(0.0..50.0f32);
            let probability_pct = rng.gen_range(50.0..95.0f32);
            let lat = MAP_CENTER_LAT + rng.gen_range(-MARKER_JITTER_DEG..MARKER_JITTER_DEG);
            let lon = MAP_CENTER_LON + rng.gen_range(-MARKER_JITTER_DEG..MARKER_JITTER_DEG);

            let flagged = is_flagged(
                elevation_m,
                inputs.elevation_threshold_m as f32,
                inputs.rainfall_mm,
                inputs.soil_moisture_pct,
            );

            RiskPoint {
                id,
                elevation_m,
                probability_pct,
                flagged,
                tier: classify(flagged, probability_pct),
                lat,
                lon,
            }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
