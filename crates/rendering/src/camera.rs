//! Fixed oblique camera over the map panel, with scroll-wheel zoom.

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;

/// Initial camera position: high and tilted south of the map center.
const CAMERA_START: Vec3 = Vec3::new(0.0, 420.0, 380.0);

/// Zoom limits (distance from the map center, world units).
const MIN_CAMERA_DISTANCE: f32 = 120.0;
const MAX_CAMERA_DISTANCE: f32 = 1200.0;

/// World units moved per scroll step.
const ZOOM_STEP: f32 = 30.0;

pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(200.0, 400.0, 100.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
    });
}

/// Scroll wheel: move the camera along its line to the map center, clamped
/// so the map never leaves view.
pub fn camera_zoom(
    mut wheel: EventReader<MouseWheel>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    let scroll: f32 = wheel.read().map(|e| e.y).sum();
    if scroll == 0.0 {
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };

    let distance = transform.translation.length();
    let direction = transform.translation.normalize_or_zero();
    let new_distance =
        (distance - scroll * ZOOM_STEP).clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
    transform.translation = direction * new_distance;
}
