//! Tier-colored sample-point markers.
//!
//! Marker entities are cheap and few (at most 50), so the sync system
//! simply despawns and respawns them whenever the assessment resource is
//! replaced. Mesh and material handles are cached per tier at startup so
//! recomputes allocate no new assets.

use bevy::prelude::*;

use simulation::assessment::RiskAssessment;
use simulation::geo;
use simulation::risk::RiskTier;

use crate::tier_colors::{tier_color, tier_marker_radius};

/// Marker cylinder height (world units).
const MARKER_HEIGHT: f32 = 2.0;

/// Marks one flagged sample point on the map.
#[derive(Component)]
pub struct RiskMarker;

/// Cached mesh/material handles per flagged tier.
#[derive(Resource)]
pub struct MarkerAssets {
    medium: (Handle<Mesh>, Handle<StandardMaterial>),
    high: (Handle<Mesh>, Handle<StandardMaterial>),
    extreme: (Handle<Mesh>, Handle<StandardMaterial>),
}

impl MarkerAssets {
    fn for_tier(&self, tier: RiskTier) -> Option<&(Handle<Mesh>, Handle<StandardMaterial>)> {
        match tier {
            RiskTier::None => None,
            RiskTier::Medium => Some(&self.medium),
            RiskTier::High => Some(&self.high),
            RiskTier::Extreme => Some(&self.extreme),
        }
    }
}

pub fn setup_marker_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut build = |tier: RiskTier| {
        let radius = tier_marker_radius(tier).unwrap_or(1.0);
        let color = tier_color(tier).unwrap_or(Color::WHITE);
        (
            meshes.add(Cylinder::new(radius, MARKER_HEIGHT)),
            materials.add(StandardMaterial {
                base_color: color,
                perceptual_roughness: 0.8,
                ..default()
            }),
        )
    };

    let assets = MarkerAssets {
        medium: build(RiskTier::Medium),
        high: build(RiskTier::High),
        extreme: build(RiskTier::Extreme),
    };
    commands.insert_resource(assets);
}

/// Rebuild the marker entities whenever the assessment is replaced.
pub fn sync_risk_markers(
    mut commands: Commands,
    assessment: Option<Res<RiskAssessment>>,
    assets: Option<Res<MarkerAssets>>,
    existing: Query<Entity, With<RiskMarker>>,
) {
    let (Some(assessment), Some(assets)) = (assessment, assets) else {
        return;
    };
    if !assessment.is_changed() {
        return;
    }

    for entity in &existing {
        commands.entity(entity).despawn();
    }

    for point in assessment.points.iter().filter(|p| p.flagged) {
        let Some((mesh, material)) = assets.for_tier(point.tier) else {
            continue;
        };
        let mut position = geo::latlon_to_world(point.lat, point.lon);
        position.y = MARKER_HEIGHT / 2.0;

        commands.spawn((
            RiskMarker,
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
        ));
    }
}
