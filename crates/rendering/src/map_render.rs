//! Static map furniture: the ground plane and the fixed risk-zone disc.

use bevy::prelude::*;

use simulation::config::RISK_ZONE_RADIUS_M;
use simulation::geo;

/// Ground plane edge length (world units). Large enough that the 20 km
/// risk zone and the full marker scatter sit well inside it.
const GROUND_SIZE: f32 = 700.0;

/// Thickness of the translucent risk-zone disc.
const ZONE_DISC_HEIGHT: f32 = 0.2;

/// Marks the translucent disc showing the main risk zone.
#[derive(Component)]
pub struct RiskZoneDisc;

pub fn setup_map(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.33, 0.45, 0.33),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::IDENTITY,
    ));

    // Main risk zone: a 20 km translucent purple disc at the map center.
    commands.spawn((
        RiskZoneDisc,
        Mesh3d(meshes.add(Cylinder::new(
            geo::meters_to_world(RISK_ZONE_RADIUS_M),
            ZONE_DISC_HEIGHT,
        ))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgba(0.55, 0.15, 0.65, 0.2),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, ZONE_DISC_HEIGHT / 2.0, 0.0),
    ));
}
