use super::coordinate_system::CoordinateSystem;
use super::point::{Dim, Point, SupportedDim};
use crate::math::projection::lerp;
use crate::math::VectorN;

/// A finite straight segment from `first` to `second`.
///
/// `first == second` is allowed; every operation treats it as the point `first`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<S, const D: usize> {
    pub first: Point<S, D>,
    pub second: Point<S, D>,
}

impl<S: CoordinateSystem, const D: usize> Segment<S, D>
where
    Dim<D>: SupportedDim,
{
    /// Creates a new segment.
    #[must_use]
    pub fn new(first: Point<S, D>, second: Point<S, D>) -> Self {
        Self { first, second }
    }

    /// Returns the vector from `first` to `second`.
    #[must_use]
    pub fn vector(&self) -> VectorN<D> {
        self.second.coords() - self.first.coords()
    }

    /// Returns whether both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.first == self.second
    }

    /// Returns the point at parameter `t`, where `0` is `first` and `1` is `second`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point<S, D> {
        Point::from_coords(lerp(self.first.coords(), self.second.coords(), t))
    }

    /// Returns the distance between the endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.first.distance_to(&self.second)
    }

    /// Returns the segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point2, Point3, PointGeo2};

    #[test]
    fn length_3_4_5() {
        let seg = Segment::new(Point2::new(0.0, 0.0), Point2::new(3.0, 4.0));
        assert!((seg.length() - 5.0).abs() < 1e-12);
        assert!((seg.reversed().length() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_detection() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert!(Segment::new(p, p).is_degenerate());
        assert!(!Segment::new(p, Point3::new(1.0, 1.0, 2.0)).is_degenerate());
    }

    #[test]
    fn point_at_interpolates() {
        let seg = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 2.0, -2.0));
        let m = seg.point_at(0.25);
        assert!((m.x() - 1.0).abs() < 1e-12);
        assert!((m.y() - 0.5).abs() < 1e-12);
        assert!((m.z() + 0.5).abs() < 1e-12);
        assert_eq!(seg.point_at(0.0), seg.first);
    }

    #[test]
    fn geographic_length_in_meters() {
        let seg = Segment::new(PointGeo2::new(0.0, 0.0), PointGeo2::new(1.0, 0.0));
        assert!((seg.length() - 111_319.490_793).abs() < 1e-3);
    }

    #[test]
    fn vector_components() {
        let seg = Segment::new(Point2::new(1.0, 2.0), Point2::new(4.0, 6.0));
        let v = seg.vector();
        assert!((v.x - 3.0).abs() < 1e-12);
        assert!((v.y - 4.0).abs() < 1e-12);
    }
}
