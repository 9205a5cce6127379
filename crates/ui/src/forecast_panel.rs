//! The 7-day risk outlook chart.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::assessment::RiskAssessment;

use crate::drawing::draw_percent_chart;

const CHART_WIDTH: f32 = 320.0;
const CHART_HEIGHT: f32 = 120.0;

pub fn forecast_panel_ui(mut contexts: EguiContexts, assessment: Option<Res<RiskAssessment>>) {
    let Some(assessment) = assessment else {
        return;
    };

    egui::Window::new("7-Day Risk Outlook")
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            let values: Vec<f32> = assessment.forecast.iter().map(|p| p.risk_pct).collect();
            draw_percent_chart(
                ui,
                &values,
                egui::Color32::from_rgb(90, 170, 230),
                CHART_WIDTH,
                CHART_HEIGHT,
            );

            if let (Some(first), Some(last)) =
                (assessment.forecast.first(), assessment.forecast.last())
            {
                ui.horizontal(|ui| {
                    ui.small(first.date.format("%b %d").to_string());
                    ui.add_space(CHART_WIDTH - 110.0);
                    ui.small(last.date.format("%b %d").to_string());
                });
            }

            ui.small(format!(
                "Noise around the current {:.1}% estimate, not a forecast.",
                assessment.predicted_risk_pct
            ));
        });
}
