use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod control_panel;
pub mod drawing;
pub mod forecast_panel;
pub mod map_legend;
pub mod points_table;
pub mod risk_panel;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<map_legend::LegendVisible>()
            .init_resource::<points_table::PointsTableVisible>()
            .add_systems(Startup, theme::apply_theme)
            .add_systems(
                Update,
                (
                    control_panel::control_panel_ui,
                    risk_panel::risk_panel_ui,
                    forecast_panel::forecast_panel_ui,
                    map_legend::map_legend_ui,
                    points_table::points_table_ui,
                    points_table::panel_keybinds,
                ),
            );
    }
}
