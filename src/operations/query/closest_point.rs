use crate::geometry::{CoordinateSystem, Dim, Point, Segment, SupportedDim};
use crate::math::projection::{lerp, segment_parameter};

/// Result of projecting a point onto a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection<S, const D: usize> {
    /// The closest point on the segment.
    pub point: Point<S, D>,
    /// Segment parameter of `point` in `[0, 1]`; `0` is `first`, `1` is `second`.
    pub parameter: f64,
}

/// Projects `point` onto `segment`.
///
/// Computes `t = (AP · AB) / (AB · AB)`, falls back to `t = 0` for a
/// zero-length segment, and clamps `t` to `[0, 1]` so the result stays on
/// the segment. Geographic coordinates are projected in degree space.
#[must_use]
pub fn project<S: CoordinateSystem, const D: usize>(
    point: &Point<S, D>,
    segment: &Segment<S, D>,
) -> Projection<S, D>
where
    Dim<D>: SupportedDim,
{
    let a = segment.first.coords();
    let b = segment.second.coords();
    let parameter = segment_parameter(point.coords(), a, b);
    Projection {
        point: Point::from_coords(lerp(a, b, parameter)),
        parameter,
    }
}

/// Returns the point of `segment` closest to `point`.
#[must_use]
pub fn closest_point<S: CoordinateSystem, const D: usize>(
    point: &Point<S, D>,
    segment: &Segment<S, D>,
) -> Point<S, D>
where
    Dim<D>: SupportedDim,
{
    project(point, segment).point
}
