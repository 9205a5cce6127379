//! Tunable constants for the early-warning demo.

/// Upper bound of the rainfall slider (mm).
pub const RAINFALL_MAX_MM: u32 = 100;
/// Upper bound of the soil-moisture slider (%).
pub const SOIL_MOISTURE_MAX_PCT: u32 = 100;
/// Upper bound of the elevation-threshold slider (m).
pub const ELEVATION_MAX_M: u32 = 50;

/// Rows in the synthetic training table regenerated per evaluation.
pub const TRAINING_ROWS: usize = 50;

/// Random map sample points generated per evaluation.
pub const NUM_SAMPLE_POINTS: u32 = 50;

/// Days covered by the fabricated forecast series.
pub const FORECAST_DAYS: usize = 7;

/// Standard deviation (percentage points) of the forecast noise.
pub const FORECAST_NOISE_STD: f64 = 5.0;

/// Predicted risk (%) above which the early-warning banner activates.
/// Strictly above: exactly 70.0 stays all-clear.
pub const EARLY_WARNING_THRESHOLD_PCT: f32 = 70.0;

/// Map sample points scatter within this many degrees of the map center
/// on both axes.
pub const MARKER_JITTER_DEG: f64 = 0.05;

/// Radius of the fixed main risk zone drawn at the map center (meters).
pub const RISK_ZONE_RADIUS_M: f64 = 20_000.0;
