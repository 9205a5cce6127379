//! Headline risk readout and the early-warning banner.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::assessment::{AlertLevel, RiskAssessment};

pub fn risk_panel_ui(mut contexts: EguiContexts, assessment: Option<Res<RiskAssessment>>) {
    let Some(assessment) = assessment else {
        return;
    };

    egui::Window::new("Risk Assessment")
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 12.0])
        .resizable(false)
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.spacing_mut().item_spacing.y = 8.0;

            ui.heading(format!(
                "Estimated risk: {:.1}%",
                assessment.predicted_risk_pct
            ));
            ui.label(format!(
                "Critical sample points: {}",
                assessment.flagged_count
            ));

            ui.separator();

            match assessment.alert {
                AlertLevel::EarlyWarning => banner(
                    ui,
                    egui::Color32::from_rgb(122, 38, 38),
                    "Early warning active: simulated SMS dispatch to authorities.",
                ),
                AlertLevel::AllClear => banner(
                    ui,
                    egui::Color32::from_rgb(35, 92, 53),
                    "No critical risk detected.",
                ),
            }
        });
}

fn banner(ui: &mut egui::Ui, fill: egui::Color32, text: &str) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(4))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(text).strong().color(egui::Color32::WHITE));
        });
}
