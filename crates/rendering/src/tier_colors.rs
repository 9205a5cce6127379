//! Marker color and size per risk tier.
//!
//! Unflagged (`RiskTier::None`) points draw nothing, so both lookups answer
//! `None` for them. Higher tiers get hotter colors and larger markers.

use bevy::prelude::*;
use simulation::risk::RiskTier;

/// Marker fill color for a tier; `None` for unflagged points.
pub fn tier_color(tier: RiskTier) -> Option<Color> {
    match tier {
        RiskTier::None => None,
        RiskTier::Medium => Some(Color::srgb(0.95, 0.55, 0.10)),
        RiskTier::High => Some(Color::srgb(0.85, 0.15, 0.10)),
        RiskTier::Extreme => Some(Color::srgb(0.45, 0.03, 0.05)),
    }
}

/// Marker radius in world units; `None` for unflagged points.
pub fn tier_marker_radius(tier: RiskTier) -> Option<f32> {
    match tier {
        RiskTier::None => None,
        RiskTier::Medium => Some(5.0),
        RiskTier::High => Some(7.0),
        RiskTier::Extreme => Some(10.0),
    }
}

// =============================================================================
// Tests
// =============================================================================
