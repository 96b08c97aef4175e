//! Ellipsoidal distances on WGS84.

use geo::{Distance, Geodesic, Point};

/// Returns the geodesic distance in meters between `(lon1, lat1)` and
/// `(lon2, lat2)` on the WGS84 ellipsoid.
///
/// Inputs are in degrees. Karney's solution is used, so nearly antipodal
/// points converge as well.
#[must_use]
pub fn geodesic_distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    Geodesic.distance(Point::new(lon1, lat1), Point::new(lon2, lat2))
}
