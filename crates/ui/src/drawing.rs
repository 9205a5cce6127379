//! Shared drawing helpers for the panels: the fixed-scale percentage
//! chart, legend swatch rows, and bevy-to-egui color conversion.

use bevy_egui::egui;

/// Vertical pixel position of a percentage value inside a chart rect
/// (0% at the bottom edge, 100% at the top).
pub(crate) fn percent_to_y(pct: f32, rect: egui::Rect) -> f32 {
    rect.max.y - (pct.clamp(0.0, 100.0) / 100.0) * rect.height()
}

/// Draw a single series on a fixed 0-100% scale with grid lines every 25
/// points. Values are spaced evenly along the x axis.
pub(crate) fn draw_percent_chart(
    ui: &mut egui::Ui,
    values: &[f32],
    color: egui::Color32,
    width: f32,
    height: f32,
) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(30));

    for pct in [0.0, 25.0, 50.0, 75.0, 100.0] {
        let y = percent_to_y(pct, rect);
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(0.3, egui::Color32::from_gray(60)),
        );
    }

    if values.len() < 2 {
        return;
    }

    let points: Vec<egui::Pos2> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = rect.min.x + (i as f32 / (values.len() - 1) as f32) * rect.width();
            egui::pos2(x, percent_to_y(v, rect))
        })
        .collect();

    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], egui::Stroke::new(1.5, color));
    }
    for p in &points {
        painter.circle_filled(*p, 2.5, color);
    }
}

/// A small color swatch followed by a text label.
pub(crate) fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.label(text);
}

/// Convert a bevy color to its egui equivalent.
pub(crate) fn bevy_color_to_egui(color: bevy::prelude::Color) -> egui::Color32 {
    let s = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (s.red * 255.0) as u8,
        (s.green * 255.0) as u8,
        (s.blue * 255.0) as u8,
        (s.alpha * 255.0) as u8,
    )
}

// =============================================================================
// Tests
// =============================================================================
