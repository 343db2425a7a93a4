use crate::models::Coordinate;

/// Planar distance, in degrees, under which two points count as near.
///
/// This is a flat-earth approximation over raw lat/lng and stretches with
/// latitude. It is kept as-is so results match the listing pages.
pub const PROXIMITY_THRESHOLD: f64 = 0.1;

/// Euclidean norm of the raw latitude/longitude differences.
pub fn planar_distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = a.lat - b.lat;
    let d_lng = a.lng - b.lng;
    (d_lat * d_lat + d_lng * d_lng).sqrt()
}

pub fn is_near(a: Coordinate, b: Coordinate) -> bool {
    planar_distance(a, b) < PROXIMITY_THRESHOLD
}
