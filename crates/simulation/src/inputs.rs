//! The three user-adjustable scenario inputs.
//!
//! Edited by the UI sliders; the assessment system watches this resource
//! for changes and re-runs the full evaluation pipeline.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{ELEVATION_MAX_M, RAINFALL_MAX_MM, SOIL_MOISTURE_MAX_PCT};

/// Slider values for one evaluation: rainfall amount, soil moisture, and the
/// elevation below which sample points are considered exposed.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    /// Rainfall amount in millimeters (0-100).
    pub rainfall_mm: u32,
    /// Soil moisture in percent (0-100).
    pub soil_moisture_pct: u32,
    /// Maximum exposed elevation in meters (0-50).
    pub elevation_threshold_m: u32,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            rainfall_mm: 50,
            soil_moisture_pct: 60,
            elevation_threshold_m: 20,
        }
    }
}

impl ScenarioInputs {
    /// Clamp all values to their slider ranges. The UI controls already
    /// enforce these bounds; this re-applies them for inputs constructed
    /// in code.
    pub fn clamped(self) -> Self {
        Self {
            rainfall_mm: self.rainfall_mm.min(RAINFALL_MAX_MM),
            soil_moisture_pct: self.soil_moisture_pct.min(SOIL_MOISTURE_MAX_PCT),
            elevation_threshold_m: self.elevation_threshold_m.min(ELEVATION_MAX_M),
        }
    }

    /// Feature vector in the same column order as the training table:
    /// rainfall, soil moisture, elevation.
    pub fn features(&self) -> [f64; 3] {
        [
            f64::from(self.rainfall_mm),
            f64::from(self.soil_moisture_pct),
            f64::from(self.elevation_threshold_m),
        ]
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
