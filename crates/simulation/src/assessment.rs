//! The per-evaluation view model and the recompute pipeline.
//!
//! `recompute` is the explicit, pure entry point for one full evaluation:
//! regenerate the synthetic table, refit the estimator, predict the
//! headline risk, fabricate the outlook series, and rescatter the map
//! points. The `refresh_assessment` system invokes it once at startup and
//! again whenever the slider inputs change, replacing the whole
//! [`RiskAssessment`] resource; rendering and UI react through resource
//! change detection.

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{EARLY_WARNING_THRESHOLD_PCT, TRAINING_ROWS};
use crate::dataset;
use crate::forecast::{self, ForecastPoint};
use crate::forest::{ForestConfig, RiskForest};
use crate::inputs::ScenarioInputs;
use crate::risk_map::{self, RiskPoint};
use crate::sim_rng::SimRng;

// =============================================================================
// Alert level
// =============================================================================

/// Banner state derived from the headline risk percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertLevel {
    /// Predicted risk at or below the warning threshold.
    AllClear,
    /// Predicted risk strictly above the warning threshold; the demo
    /// simulates an SMS dispatch to the authorities.
    EarlyWarning,
}

impl AlertLevel {
    /// Alert for a headline risk percentage. Strictly above the threshold
    /// activates the warning; exactly at it stays all-clear.
    pub fn from_risk_pct(predicted_risk_pct: f32) -> Self {
        if predicted_risk_pct > EARLY_WARNING_THRESHOLD_PCT {
            AlertLevel::EarlyWarning
        } else {
            AlertLevel::AllClear
        }
    }
}

// =============================================================================
// View model
// =============================================================================

/// Everything one evaluation produces, replaced wholesale per recompute.
/// Nothing in here survives to the next evaluation.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// The (clamped) inputs this assessment was computed from.
    pub inputs: ScenarioInputs,
    /// Headline risk percentage from the estimator, clamped to [0, 100].
    pub predicted_risk_pct: f32,
    /// Fabricated 7-day outlook centered on the headline percentage.
    pub forecast: Vec<ForecastPoint>,
    /// All map sample points, flagged or not.
    pub points: Vec<RiskPoint>,
    /// Number of flagged points.
    pub flagged_count: u32,
    pub alert: AlertLevel,
}

/// Run one full evaluation. Pure given the RNG: identical inputs and RNG
/// state reproduce the identical assessment.
pub fn recompute(inputs: &ScenarioInputs, rng: &mut impl Rng) -> RiskAssessment {
    let inputs = inputs.clamped();

    let rows = dataset::generate_training_set(rng, TRAINING_ROWS);
    let features: Vec<[f64; 3]> = rows.iter().map(|r| r.features()).collect();
    let labels: Vec<bool> = rows.iter().map(|r| r.label).collect();

    let estimator = RiskForest::fit(&features, &labels, &ForestConfig::default(), rng);
    let predicted_risk_pct =
        (estimator.predict_probability(&inputs.features()) * 100.0).clamp(0.0, 100.0) as f32;

    let forecast = forecast::forecast_series(predicted_risk_pct, rng);
    let points = risk_map::generate_risk_points(&inputs, rng);
    let flagged_count = points.iter().filter(|p| p.flagged).count() as u32;

    RiskAssessment {
        inputs,
        predicted_risk_pct,
        forecast,
        points,
        flagged_count,
        alert: AlertLevel::from_risk_pct(predicted_risk_pct),
    }
}

// =============================================================================
// System
// =============================================================================

/// Rebuild the assessment at startup and on every slider change.
pub fn refresh_assessment(
    mut commands: Commands,
    inputs: Res<ScenarioInputs>,
    mut rng: ResMut<SimRng>,
    current: Option<Res<RiskAssessment>>,
) {
    if current.is_some() && !inputs.is_changed() {
        return;
    }

    let assessment = recompute(&inputs, &mut rng.0);
    info!(
        "risk recomputed: {:.1}% predicted, {} flagged points, {:?}",
        assessment.predicted_risk_pct, assessment.flagged_count, assessment.alert
    );
    commands.insert_resource(assessment);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_threshold_is_strict() {
        assert_eq!(AlertLevel::from_risk_pct(70.0), AlertLevel::AllClear);
        assert_eq!(AlertLevel::from_risk_pct(70.1), AlertLevel::EarlyWarning);
        assert_eq!(AlertLevel::from_risk_pct(0.0), AlertLevel::AllClear);
        assert_eq!(AlertLevel::from_risk_pct(100.0), AlertLevel::EarlyWarning);
    }

    // -------------------------------------------------------------------------
    // refresh_assessment system tests
    // -------------------------------------------------------------------------

    /// Helper: build a minimal Bevy App with the refresh system and its
    /// resources.
    fn assessment_test_app() -> App {
        let mut app = App::new();
        app.init_resource::<SimRng>()
            .init_resource::<ScenarioInputs>()
            .add_systems(Update, refresh_assessment);
        app
    }

    #[test]
    fn test_refresh_inserts_assessment_on_first_update() {
        let mut app = assessment_test_app();
        assert!(app.world().get_resource::<RiskAssessment>().is_none());
        app.update();
        assert!(app.world().get_resource::<RiskAssessment>().is_some());
    }

    #[test]
    fn test_refresh_skips_when_inputs_unchanged() {
        let mut app = assessment_test_app();
        app.update();
        let first = app.world().resource::<RiskAssessment>().clone();
        app.update();
        let second = app.world().resource::<RiskAssessment>().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_refresh_recomputes_on_input_change() {
        let mut app = assessment_test_app();
        app.update();
        let first = app.world().resource::<RiskAssessment>().clone();

        app.world_mut()
            .resource_mut::<ScenarioInputs>()
            .rainfall_mm = 90;
        app.update();

        let second = app.world().resource::<RiskAssessment>().clone();
        assert_eq!(second.inputs.rainfall_mm, 90);
        // The RNG advanced, so the rescattered points differ as well.
        assert_ne!(first.points, second.points);
    }
}
