//! Risk tiering and point flagging.
//!
//! A map sample point is *flagged* when it sits below the elevation
//! threshold while rainfall and soil moisture both exceed their trigger
//! levels (all strict comparisons). A flagged point is then assigned a
//! discrete severity tier from its probability score; unflagged points are
//! always `RiskTier::None`.

use serde::{Deserialize, Serialize};

// =============================================================================
// Flagging thresholds
// =============================================================================

/// Rainfall (mm) must strictly exceed this for a point to be flagged.
pub const FLAG_RAINFALL_MM: u32 = 40;

/// Soil moisture (%) must strictly exceed this for a point to be flagged.
pub const FLAG_SOIL_MOISTURE_PCT: u32 = 50;

// =============================================================================
// Risk tiers
// =============================================================================

/// Discrete severity bucket assigned to a flagged map point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    /// Point is not flagged; carries no severity.
    None,
    /// Flagged with probability below 70%.
    Medium,
    /// Flagged with probability in [70%, 85%).
    High,
    /// Flagged with probability at or above 85%.
    Extreme,
}

impl RiskTier {
    /// Tier for a flagged point with the given probability score (0-100).
    /// Callers clamp the probability before calling; the ladder is total
    /// over the closed range.
    pub fn from_probability(probability_pct: f32) -> Self {
        if probability_pct < 70.0 {
            RiskTier::Medium
        } else if probability_pct < 85.0 {
            RiskTier::High
        } else {
            RiskTier::Extreme
        }
    }

    /// Human-readable name for display in the UI.
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::None => "None",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
            RiskTier::Extreme => "Extreme",
        }
    }
}

// =============================================================================
// Core rules
// =============================================================================

/// Assign a severity tier: `RiskTier::None` unless flagged, otherwise a
/// strict function of the probability score. Pure; no side effects.
pub fn classify(flagged: bool, probability_pct: f32) -> RiskTier {
    if !flagged {
        return RiskTier::None;
    }
    RiskTier::from_probability(probability_pct)
}

/// Conjunctive flagging rule. All three comparisons are strict, so boundary
/// values (rainfall == 40, moisture == 50, elevation == threshold) never
/// flag.
pub fn is_flagged(
    point_elevation_m: f32,
    elevation_threshold_m: f32,
    rainfall_mm: u32,
    soil_moisture_pct: u32,
) -> bool {
    point_elevation_m < elevation_threshold_m
        && rainfall_mm > FLAG_RAINFALL_MM
        && soil_moisture_pct > FLAG_SOIL_MOISTURE_PCT
}

// =============================================================================
// Tests
// =============================================================================
