//! Geographic anchoring of the map panel.
//!
//! The demo map is a small region around a fixed center. Sample-point
//! positions are stored as latitude/longitude and projected onto the 3D
//! ground plane with a local equirectangular projection: good enough at
//! this scale, and keeps the world-unit mapping in one place.

use bevy::math::Vec3;

/// Latitude of the map center (degrees north).
pub const MAP_CENTER_LAT: f64 = 23.7;
/// Longitude of the map center (degrees east).
pub const MAP_CENTER_LON: f64 = 90.4;

/// Meters per degree of latitude (spherical-earth approximation).
pub const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// World units per meter. One world unit is 100 m, which puts the 20 km
/// risk zone at radius 200 and the marker scatter within ~±56 units.
pub const WORLD_UNITS_PER_METER: f64 = 0.01;

/// Meters per degree of longitude at the map center's latitude.
pub fn meters_per_deg_lon() -> f64 {
    METERS_PER_DEG_LAT * MAP_CENTER_LAT.to_radians().cos()
}

/// Project a latitude/longitude pair onto the ground plane.
///
/// The map center maps to the origin; +x is east, -z is north, y is 0.
pub fn latlon_to_world(lat: f64, lon: f64) -> Vec3 {
    let east_m = (lon - MAP_CENTER_LON) * meters_per_deg_lon();
    let north_m = (lat - MAP_CENTER_LAT) * METERS_PER_DEG_LAT;
    Vec3::new(
        (east_m * WORLD_UNITS_PER_METER) as f32,
        0.0,
        (-north_m * WORLD_UNITS_PER_METER) as f32,
    )
}

/// Convert a distance in meters to world units.
pub fn meters_to_world(meters: f64) -> f32 {
    (meters * WORLD_UNITS_PER_METER) as f32
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_projects_to_origin() {
        let p = latlon_to_world(MAP_CENTER_LAT, MAP_CENTER_LON);
        assert!(p.length() < f32::EPSILON);
    }

    #[test]
    fn test_north_is_negative_z() {
        let p = latlon_to_world(MAP_CENTER_LAT + 0.05, MAP_CENTER_LON);
        assert!(p.z < 0.0);
        assert!(p.x.abs() < f32::EPSILON);
    }

    #[test]
    fn test_east_is_positive_x() {
        let p = latlon_to_world(MAP_CENTER_LAT, MAP_CENTER_LON + 0.05);
        assert!(p.x > 0.0);
        assert!(p.z.abs() < f32::EPSILON);
    }

    #[test]
    fn test_latitude_displacement_magnitude() {
        // 0.05 deg of latitude is ~5566 m, i.e. ~55.7 world units.
        let p = latlon_to_world(MAP_CENTER_LAT + 0.05, MAP_CENTER_LON);
        assert!((p.z.abs() - 55.66).abs() < 0.5, "z={}", p.z);
    }

    #[test]
    fn test_longitude_degrees_shrink_with_latitude() {
        assert!(meters_per_deg_lon() < METERS_PER_DEG_LAT);
        assert!(meters_per_deg_lon() > 0.9 * METERS_PER_DEG_LAT * 0.9);
    }

    #[test]
    fn test_meters_to_world_scale() {
        assert!((meters_to_world(20_000.0) - 200.0).abs() < f32::EPSILON);
    }
}
