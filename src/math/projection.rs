use super::{Coords, VectorN};

/// Computes the raw projection parameter `t = (ap · ab) / (ab · ab)` of a
/// point onto the line through a segment.
///
/// The result is unclamped and may be NaN or infinite for a zero-length `ab`.
#[must_use]
pub fn projection_parameter<const D: usize>(ap: &VectorN<D>, ab: &VectorN<D>) -> f64 {
    ap.dot(ab) / ab.dot(ab)
}

/// Replaces an unusable projection parameter with `0`.
///
/// A zero-length segment gives `0 / 0 = NaN`; in that case the projection
/// collapses onto the segment start. Finite values pass through unchanged.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn guard_nan(t: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || t.is_nan() {
        0.0
    } else {
        t
    }
}

/// Returns the clamped segment parameter in `[0, 1]` for `p` projected onto
/// the segment `a`–`b`.
#[must_use]
pub fn segment_parameter<const D: usize>(p: &Coords<D>, a: &Coords<D>, b: &Coords<D>) -> f64 {
    let ab = b - a;
    let ap = p - a;
    let t = guard_nan(projection_parameter(&ap, &ab), ab.dot(&ab));
    t.clamp(0.0, 1.0)
}

/// Evaluates `a + t * (b - a)`.
#[must_use]
pub fn lerp<const D: usize>(a: &Coords<D>, b: &Coords<D>, t: f64) -> Coords<D> {
    a + (b - a) * t
}
