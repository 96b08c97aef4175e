//! Well-Known Text output.
//!
//! Coordinates are written with a fixed number of decimals chosen by the
//! coordinate system: 7 for geographic points, 2 for planar ones.

use std::fmt::{self, Write};

use crate::geometry::{Aabb, CoordinateSystem, Dim, LineString, Point, Segment, SupportedDim};

/// Geometries with a Well-Known Text representation.
pub trait ToWkt {
    /// Writes the WKT representation into `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    fn write_wkt<W: Write>(&self, out: &mut W) -> fmt::Result;

    /// Returns the WKT representation as a string, or an empty string if
    /// formatting fails.
    fn to_wkt(&self) -> String {
        let mut out = String::new();
        if self.write_wkt(&mut out).is_err() {
            out.clear();
        }
        out
    }
}

/// Writes `x y[ z]` with the system's precision.
fn write_coords<S: CoordinateSystem, const D: usize, W: Write>(
    out: &mut W,
    point: &Point<S, D>,
) -> fmt::Result
where
    Dim<D>: SupportedDim,
{
    for (axis, value) in point.as_slice().iter().enumerate() {
        if axis > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{:.*}", S::WKT_PRECISION, value)?;
    }
    Ok(())
}

/// Writes a comma separated coordinate list.
fn write_coord_list<'a, S, const D: usize, W, I>(out: &mut W, points: I) -> fmt::Result
where
    S: CoordinateSystem + 'a,
    W: Write,
    I: IntoIterator<Item = &'a Point<S, D>>,
    Dim<D>: SupportedDim,
{
    for (i, point) in points.into_iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write_coords(out, point)?;
    }
    Ok(())
}

impl<S: CoordinateSystem, const D: usize> ToWkt for Point<S, D>
where
    Dim<D>: SupportedDim,
{
    fn write_wkt<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("POINT(")?;
        write_coords(out, self)?;
        out.write_char(')')
    }
}

impl<S: CoordinateSystem, const D: usize> ToWkt for Segment<S, D>
where
    Dim<D>: SupportedDim,
{
    fn write_wkt<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("LINESTRING(")?;
        write_coord_list(out, [&self.first, &self.second])?;
        out.write_char(')')
    }
}

impl<S: CoordinateSystem, const D: usize> ToWkt for [Point<S, D>]
where
    Dim<D>: SupportedDim,
{
    fn write_wkt<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("LINESTRING(")?;
        write_coord_list(out, self)?;
        out.write_char(')')
    }
}

impl<S: CoordinateSystem, const D: usize> ToWkt for LineString<S, D>
where
    Dim<D>: SupportedDim,
{
    fn write_wkt<W: Write>(&self, out: &mut W) -> fmt::Result {
        self.points().write_wkt(out)
    }
}

/// 2D boxes are written as a closed polygon ring, 3D boxes as `BOX(min,max)`.
impl<S: CoordinateSystem, const D: usize> ToWkt for Aabb<S, D>
where
    Dim<D>: SupportedDim,
{
    fn write_wkt<W: Write>(&self, out: &mut W) -> fmt::Result {
        let (lo, hi) = (self.min(), self.max());
        if D == 2 {
            let corner = |x: &Point<S, D>, y: &Point<S, D>| {
                let mut coords = *lo.coords();
                coords[0] = x.coords()[0];
                coords[1] = y.coords()[1];
                Point::<S, D>::from_coords(coords)
            };
            let ring = [
                corner(lo, lo),
                corner(lo, hi),
                corner(hi, hi),
                corner(hi, lo),
                corner(lo, lo),
            ];
            out.write_str("POLYGON((")?;
            write_coord_list(out, &ring)?;
            out.write_str("))")
        } else {
            out.write_str("BOX(")?;
            write_coord_list(out, [lo, hi])?;
            out.write_char(')')
        }
    }
}
