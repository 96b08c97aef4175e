use crate::geometry::{Aabb, CoordinateSystem, Dim, Point, SupportedDim};

/// Builds the probe box around `center` used to prune polyline searches.
///
/// The box spans `center ± edge_length` on every axis. For geographic points
/// `edge_length` is given in meters and converted with
/// [`GEOGRAPHIC_FACTOR`](crate::math::GEOGRAPHIC_FACTOR) on the latitude axis;
/// the longitude axis is widened by `1 / cos(lat)` and the altitude axis is
/// left unbounded.
#[must_use]
pub fn make_box<S: CoordinateSystem, const D: usize>(
    center: &Point<S, D>,
    edge_length: f64,
) -> Aabb<S, D>
where
    Dim<D>: SupportedDim,
{
    let half = S::probe_half_extent(center.coords(), edge_length);
    Aabb::new(
        Point::from_coords(center.coords() - half),
        Point::from_coords(center.coords() + half),
    )
}
