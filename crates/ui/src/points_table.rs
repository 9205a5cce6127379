//! Flagged-point table: the inspection view for every flagged sample.
//!
//! Shows the fields the map markers cannot carry themselves (elevation,
//! probability, tier) for each flagged point of the current assessment.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::assessment::RiskAssessment;

/// Whether the flagged-point table is visible. Toggled with the T key.
#[derive(Resource, Default)]
pub struct PointsTableVisible(pub bool);

pub fn points_table_ui(
    mut contexts: EguiContexts,
    visible: Res<PointsTableVisible>,
    assessment: Option<Res<RiskAssessment>>,
) {
    if !visible.0 {
        return;
    }
    let Some(assessment) = assessment else {
        return;
    };

    egui::Window::new("Flagged Points")
        .resizable(false)
        .default_width(340.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.label(format!(
                "Threshold {} m, rainfall {} mm, soil moisture {}%",
                assessment.inputs.elevation_threshold_m,
                assessment.inputs.rainfall_mm,
                assessment.inputs.soil_moisture_pct
            ));
            ui.separator();

            if assessment.flagged_count == 0 {
                ui.label("No flagged points for the current inputs.");
                return;
            }

            egui::ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                egui::Grid::new("flagged_points_grid")
                    .striped(true)
                    .num_columns(4)
                    .show(ui, |ui| {
                        ui.strong("#");
                        ui.strong("Elevation");
                        ui.strong("Probability");
                        ui.strong("Tier");
                        ui.end_row();

                        for point in assessment.points.iter().filter(|p| p.flagged) {
                            ui.label(format!("{}", point.id));
                            ui.label(format!("{:.1} m", point.elevation_m));
                            ui.label(format!("{:.1}%", point.probability_pct));
                            ui.label(point.tier.label());
                            ui.end_row();
                        }
                    });
            });
        });
}

/// Keyboard toggles for the optional panels.
pub fn panel_keybinds(
    keys: Res<ButtonInput<KeyCode>>,
    mut legend: ResMut<crate::map_legend::LegendVisible>,
    mut table: ResMut<PointsTableVisible>,
) {
    if keys.just_pressed(KeyCode::KeyL) {
        legend.0 = !legend.0;
    }
    if keys.just_pressed(KeyCode::KeyT) {
        table.0 = !table.0;
    }
}

// =============================================================================
// Tests
// =============================================================================
