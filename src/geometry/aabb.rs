use super::coordinate_system::CoordinateSystem;
use super::point::{Dim, Point, SupportedDim};

/// An axis-aligned bounding box.
///
/// Bounds may be infinite; an infinite axis never excludes anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<S, const D: usize> {
    min: Point<S, D>,
    max: Point<S, D>,
}

impl<S: CoordinateSystem, const D: usize> Aabb<S, D>
where
    Dim<D>: SupportedDim,
{
    /// Creates the box spanned by two opposite corners, in any order.
    #[must_use]
    pub fn new(a: Point<S, D>, b: Point<S, D>) -> Self {
        Self {
            min: Point::from_coords(a.coords().inf(b.coords())),
            max: Point::from_coords(a.coords().sup(b.coords())),
        }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> &Point<S, D> {
        &self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> &Point<S, D> {
        &self.max
    }

    /// Returns whether `point` lies inside the closed box.
    #[must_use]
    pub fn contains(&self, point: &Point<S, D>) -> bool {
        (0..D).all(|axis| {
            let v = point.coords()[axis];
            v >= self.min.coords()[axis] && v <= self.max.coords()[axis]
        })
    }

    /// Returns the point of the box closest to `point` per axis.
    #[must_use]
    pub fn clamp(&self, point: &Point<S, D>) -> Point<S, D> {
        let clamped = point
            .coords()
            .sup(self.min.coords())
            .inf(self.max.coords());
        Point::from_coords(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point2, Point3};

    #[test]
    fn corners_are_normalised() {
        let b = Aabb::new(Point2::new(3.0, -1.0), Point2::new(-2.0, 4.0));
        assert_eq!(*b.min(), Point2::new(-2.0, -1.0));
        assert_eq!(*b.max(), Point2::new(3.0, 4.0));
    }

    #[test]
    fn contains_is_closed() {
        let b = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert!(b.contains(&Point3::new(0.5, 0.5, 0.5)));
        assert!(b.contains(&Point3::new(1.0, 0.0, 1.0)));
        assert!(!b.contains(&Point3::new(1.0, 0.0, 1.000_001)));
    }

    #[test]
    fn clamp_projects_outside_points() {
        let b = Aabb::new(Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
        assert_eq!(b.clamp(&Point2::new(5.0, 1.0)), Point2::new(2.0, 1.0));
        assert_eq!(b.clamp(&Point2::new(1.0, 1.5)), Point2::new(1.0, 1.5));
        assert_eq!(b.clamp(&Point2::new(-1.0, -3.0)), Point2::new(0.0, 0.0));
    }

    #[test]
    fn infinite_axis_contains_everything() {
        let b = Aabb::new(
            Point3::new(0.0, 0.0, f64::NEG_INFINITY),
            Point3::new(1.0, 1.0, f64::INFINITY),
        );
        assert!(b.contains(&Point3::new(0.5, 0.5, 1e12)));
        assert_eq!(
            b.clamp(&Point3::new(0.5, 0.5, -7.0)),
            Point3::new(0.5, 0.5, -7.0)
        );
    }
}
