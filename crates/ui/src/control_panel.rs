//! Scenario slider controls.
//!
//! The three sliders edit the `ScenarioInputs` resource. The write-back
//! happens only when a value actually changed, so the recompute system's
//! change detection stays quiet while the user is merely hovering.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::config::{ELEVATION_MAX_M, RAINFALL_MAX_MM, SOIL_MOISTURE_MAX_PCT};
use simulation::inputs::ScenarioInputs;

pub fn control_panel_ui(mut contexts: EguiContexts, mut inputs: ResMut<ScenarioInputs>) {
    let mut edited = *inputs;

    egui::Window::new("Scenario Controls")
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .resizable(false)
        .default_width(280.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            ui.label("Rainfall amount");
            ui.add(egui::Slider::new(&mut edited.rainfall_mm, 0..=RAINFALL_MAX_MM).suffix(" mm"));

            ui.label("Soil moisture");
            ui.add(
                egui::Slider::new(&mut edited.soil_moisture_pct, 0..=SOIL_MOISTURE_MAX_PCT)
                    .suffix(" %"),
            );

            ui.label("Max exposed elevation");
            ui.add(
                egui::Slider::new(&mut edited.elevation_threshold_m, 0..=ELEVATION_MAX_M)
                    .suffix(" m"),
            );

            ui.separator();
            ui.small("Every change regenerates the data, refits the model, and redraws the map.");
        });

    if edited != *inputs {
        *inputs = edited;
    }
}
