use crate::geometry::{Aabb, CoordinateSystem, Dim, Segment, SupportedDim};

/// Returns whether any point of `segment` lies inside the closed box.
///
/// Slab test: the segment `first + t * (second - first)`, `t ∈ [0, 1]`, is
/// clipped against each axis' `[min, max]` interval in turn. Infinite bounds
/// are allowed.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn intersects<S: CoordinateSystem, const D: usize>(
    segment: &Segment<S, D>,
    aabb: &Aabb<S, D>,
) -> bool
where
    Dim<D>: SupportedDim,
{
    let origin = segment.first.coords();
    let dir = segment.vector();
    let lo = aabb.min().coords();
    let hi = aabb.max().coords();

    let mut t_enter = 0.0_f64;
    let mut t_exit = 1.0_f64;

    for axis in 0..D {
        let o = origin[axis];
        let d = dir[axis];

        if d == 0.0 {
            // Parallel to this slab: inside it or never.
            if o < lo[axis] || o > hi[axis] {
                return false;
            }
            continue;
        }

        let mut t0 = (lo[axis] - o) / d;
        let mut t1 = (hi[axis] - o) / d;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return false;
        }
    }

    true
}
