use crate::geometry::{
    segments, Aabb, CoordinateSystem, Dim, LineString, Point, Segment, SupportedDim,
};

/// Geometries that can measure their distance to a point.
///
/// Distances are in the coordinate system's linear unit: meters for
/// geographic points, coordinate units otherwise. They are non-negative and
/// zero when the point lies on the geometry.
pub trait PointDistance<S, const D: usize> {
    /// Returns the distance from `point` to this geometry.
    fn distance_from(&self, point: &Point<S, D>) -> f64;
}

/// Returns the distance from `point` to `geometry`.
///
/// For two points this is the geodesic (WGS84) distance in meters
/// when the points are geographic and the Euclidean distance otherwise.
#[must_use]
pub fn distance<S, G, const D: usize>(point: &Point<S, D>, geometry: &G) -> f64
where
    S: CoordinateSystem,
    G: PointDistance<S, D> + ?Sized,
    Dim<D>: SupportedDim,
{
    geometry.distance_from(point)
}

impl<S: CoordinateSystem, const D: usize> PointDistance<S, D> for Point<S, D>
where
    Dim<D>: SupportedDim,
{
    fn distance_from(&self, point: &Point<S, D>) -> f64 {
        point.distance_to(self)
    }
}

impl<S: CoordinateSystem, const D: usize> PointDistance<S, D> for Segment<S, D>
where
    Dim<D>: SupportedDim,
{
    fn distance_from(&self, point: &Point<S, D>) -> f64 {
        S::segment_distance(point.coords(), self.first.coords(), self.second.coords())
    }
}

impl<S: CoordinateSystem, const D: usize> PointDistance<S, D> for Aabb<S, D>
where
    Dim<D>: SupportedDim,
{
    fn distance_from(&self, point: &Point<S, D>) -> f64 {
        point.distance_to(&self.clamp(point))
    }
}

/// Exact minimum over all segments. A single vertex measures as a point; an
/// empty slice is infinitely far away.
impl<S: CoordinateSystem, const D: usize> PointDistance<S, D> for [Point<S, D>]
where
    Dim<D>: SupportedDim,
{
    fn distance_from(&self, point: &Point<S, D>) -> f64 {
        match self {
            [] => f64::INFINITY,
            [only] => point.distance_to(only),
            _ => segments(self)
                .map(|seg| seg.distance_from(point))
                .fold(f64::INFINITY, f64::min),
        }
    }
}

impl<S: CoordinateSystem, const D: usize> PointDistance<S, D> for LineString<S, D>
where
    Dim<D>: SupportedDim,
{
    fn distance_from(&self, point: &Point<S, D>) -> f64 {
        self.points().distance_from(point)
    }
}
