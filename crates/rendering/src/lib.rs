use bevy::prelude::*;

pub mod camera;
pub mod map_render;
pub mod markers;
pub mod tier_colors;

/// 3D map presentation: camera, ground plane, risk-zone disc, and the
/// tier-colored sample-point markers. Display only; everything here reads
/// simulation state and feeds nothing back.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                camera::setup_camera,
                map_render::setup_map,
                markers::setup_marker_assets,
            ),
        )
        .add_systems(Update, (camera::camera_zoom, markers::sync_risk_markers));
    }
}
