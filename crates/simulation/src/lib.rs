use bevy::prelude::*;

pub mod assessment;
pub mod config;
pub mod dataset;
pub mod forecast;
pub mod forest;
pub mod geo;
pub mod inputs;
pub mod risk;
pub mod risk_map;
pub mod sim_rng;

#[cfg(test)]
mod integration_tests;

/// Registers the deterministic RNG, the slider-input resource, and the
/// system that rebuilds the [`assessment::RiskAssessment`] view model
/// whenever the inputs change.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<sim_rng::SimRng>()
            .init_resource::<inputs::ScenarioInputs>()
            .add_systems(Update, assessment::refresh_assessment);
    }
}
