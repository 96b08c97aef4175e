use std::ops::Deref;

use super::coordinate_system::CoordinateSystem;
use super::point::{Dim, Point, SupportedDim};
use super::segment::Segment;

/// An owned, open polyline.
///
/// Algorithms borrow polylines as `&[Point]`; this type dereferences to that
/// slice.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString<S, const D: usize> {
    points: Vec<Point<S, D>>,
}

impl<S: CoordinateSystem, const D: usize> LineString<S, D>
where
    Dim<D>: SupportedDim,
{
    /// Creates an empty linestring.
    #[must_use]
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Appends a vertex.
    pub fn push(&mut self, point: Point<S, D>) {
        self.points.push(point);
    }

    /// Returns the vertices.
    #[must_use]
    pub fn points(&self) -> &[Point<S, D>] {
        &self.points
    }

    /// Returns the number of segments (`0` for fewer than two vertices).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the `index`-th segment, if any.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<Segment<S, D>> {
        segment_at(&self.points, index)
    }

    /// Iterates over consecutive segments.
    pub fn segments(&self) -> impl Iterator<Item = Segment<S, D>> + '_ {
        segments(&self.points)
    }

    /// Returns the total length of the linestring.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segments().map(|seg| seg.length()).sum()
    }
}

impl<S: CoordinateSystem, const D: usize> Default for LineString<S, D>
where
    Dim<D>: SupportedDim,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, const D: usize> Deref for LineString<S, D> {
    type Target = [Point<S, D>];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<S, const D: usize> From<Vec<Point<S, D>>> for LineString<S, D> {
    fn from(points: Vec<Point<S, D>>) -> Self {
        Self { points }
    }
}

impl<S, const D: usize> FromIterator<Point<S, D>> for LineString<S, D> {
    fn from_iter<I: IntoIterator<Item = Point<S, D>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// Iterates over the segments between consecutive vertices of `points`.
pub fn segments<S: CoordinateSystem, const D: usize>(
    points: &[Point<S, D>],
) -> impl Iterator<Item = Segment<S, D>> + '_
where
    Dim<D>: SupportedDim,
{
    points
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
}

/// Returns the segment starting at vertex `index`, if it exists.
#[must_use]
pub fn segment_at<S: CoordinateSystem, const D: usize>(
    points: &[Point<S, D>],
    index: usize,
) -> Option<Segment<S, D>>
where
    Dim<D>: SupportedDim,
{
    let next = index.checked_add(1).and_then(|i| points.get(i));
    match (points.get(index), next) {
        (Some(&first), Some(&second)) => Some(Segment::new(first, second)),
        _ => None,
    }
}
