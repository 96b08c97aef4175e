use std::marker::PhantomData;

use super::coordinate_system::{Cartesian, CoordinateSystem, CoordinateSystemKind, Geographic};
use crate::error::GeometryError;
use crate::math::Coords;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Dim<2> {}
    impl Sealed for super::Dim<3> {}
}

/// Type-level dimension marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dim<const D: usize>;

/// Dimensions the crate operates in: implemented for `Dim<2>` and `Dim<3>` only.
///
/// ```compile_fail
/// use simplegeom::geometry::{Cartesian, Point};
///
/// let p = Point::<Cartesian, 4>::from_slice(&[0.0, 0.0, 0.0, 0.0]);
/// ```
pub trait SupportedDim: sealed::Sealed {}

impl SupportedDim for Dim<2> {}
impl SupportedDim for Dim<3> {}

/// A point of dimension `D` in coordinate system `S`.
///
/// Geographic points store `(longitude, latitude[, altitude])` in degrees
/// (altitude in meters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<S, const D: usize> {
    coords: Coords<D>,
    system: PhantomData<S>,
}

/// 2D Cartesian point.
pub type Point2 = Point<Cartesian, 2>;

/// 3D Cartesian point.
pub type Point3 = Point<Cartesian, 3>;

/// 2D geographic point `(lon, lat)`.
pub type PointGeo2 = Point<Geographic, 2>;

/// 3D geographic point `(lon, lat, alt)`.
pub type PointGeo3 = Point<Geographic, 3>;

impl<S: CoordinateSystem> Point<S, 2> {
    /// Creates a 2D point.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self::from_coords(Coords::from([a, b]))
    }
}

impl<S: CoordinateSystem> Point<S, 3> {
    /// Creates a 3D point.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self::from_coords(Coords::from([a, b, c]))
    }
}

impl<S: CoordinateSystem, const D: usize> Point<S, D>
where
    Dim<D>: SupportedDim,
{
    /// Wraps raw coordinates without validation.
    #[must_use]
    pub fn from_coords(coords: Coords<D>) -> Self {
        Self {
            coords,
            system: PhantomData,
        }
    }

    /// Builds a point from a coordinate slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice length differs from `D`, a coordinate is
    /// not finite, or a coordinate lies outside the system's domain (e.g. a
    /// latitude beyond ±90°).
    pub fn from_slice(values: &[f64]) -> Result<Self, GeometryError> {
        if values.len() != D {
            return Err(GeometryError::DimensionMismatch {
                expected: D,
                actual: values.len(),
            });
        }
        if let Some((axis, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(GeometryError::NonFiniteCoordinate { axis, value });
        }
        S::validate(values)?;
        Ok(Self::from_coords(Coords::from_slice(values)))
    }

    /// Returns the value on axis `AXIS`.
    ///
    /// Asking for an axis the point does not have fails to compile:
    ///
    /// ```compile_fail
    /// use simplegeom::geometry::Point2;
    ///
    /// let z = Point2::new(1.0, 2.0).get::<2>();
    /// ```
    #[must_use]
    pub fn get<const AXIS: usize>(&self) -> f64 {
        const { assert!(AXIS < D, "axis index out of range for point dimension") };
        self.coords[AXIS]
    }

    /// Returns the value on `axis`, or `None` past the last axis.
    #[must_use]
    pub fn coord(&self, axis: usize) -> Option<f64> {
        self.coords.coords.get(axis).copied()
    }

    /// Returns the underlying coordinates.
    #[must_use]
    pub fn coords(&self) -> &Coords<D> {
        &self.coords
    }

    /// Returns the coordinates as a slice of length `D`.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.coords.coords.as_slice()
    }

    /// Returns the number of axes.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        D
    }

    /// Returns the coordinate system tag.
    #[must_use]
    pub fn kind(&self) -> CoordinateSystemKind {
        S::KIND
    }

    /// Distance to `other`: geodesic meters for geographic points, Euclidean
    /// otherwise.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        S::distance(&self.coords, &other.coords)
    }
}

impl<const D: usize> Point<Cartesian, D>
where
    Dim<D>: SupportedDim,
{
    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.get::<0>()
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.get::<1>()
    }
}

impl Point<Cartesian, 3> {
    /// Returns the z coordinate.
    #[must_use]
    pub fn z(&self) -> f64 {
        self.get::<2>()
    }
}

impl<const D: usize> Point<Geographic, D>
where
    Dim<D>: SupportedDim,
{
    /// Returns the longitude in degrees.
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.get::<0>()
    }

    /// Returns the latitude in degrees.
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.get::<1>()
    }
}

impl Point<Geographic, 3> {
    /// Returns the altitude.
    #[must_use]
    pub fn alt(&self) -> f64 {
        self.get::<2>()
    }
}
