//! Map legend: tier colors and the risk-zone swatch.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::tier_colors::tier_color;
use simulation::risk::RiskTier;

use crate::drawing::{bevy_color_to_egui, legend_item};

/// Whether the map legend is visible. Toggled with the L key.
#[derive(Resource)]
pub struct LegendVisible(pub bool);

impl Default for LegendVisible {
    fn default() -> Self {
        Self(true)
    }
}

/// Probability bands shown next to each tier swatch.
fn tier_band_label(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::None => "",
        RiskTier::Medium => "Medium (below 70%)",
        RiskTier::High => "High (70% to 85%)",
        RiskTier::Extreme => "Extreme (85% and up)",
    }
}

pub fn map_legend_ui(mut contexts: EguiContexts, visible: Res<LegendVisible>) {
    if !visible.0 {
        return;
    }

    egui::Window::new("Map Legend")
        .anchor(egui::Align2::LEFT_BOTTOM, [12.0, -12.0])
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            for tier in [RiskTier::Medium, RiskTier::High, RiskTier::Extreme] {
                if let Some(color) = tier_color(tier) {
                    ui.horizontal(|ui| {
                        legend_item(ui, bevy_color_to_egui(color), tier_band_label(tier));
                    });
                }
            }
            ui.separator();
            ui.horizontal(|ui| {
                legend_item(
                    ui,
                    egui::Color32::from_rgba_unmultiplied(140, 38, 166, 120),
                    "Main risk zone (20 km)",
                );
            });
            ui.small("L toggles this legend, T the point table.");
        });
}

// =============================================================================
// Tests
// =============================================================================
