use crate::error::{GeometryError, Result};
use crate::geometry::{segment_at, segments, CoordinateSystem, Dim, Point, SupportedDim};
use crate::operations::creation::make_box;

use super::closest_point::closest_point;
use super::distance::PointDistance;
use super::intersect_box::intersects;

/// Initial probe box edge, in meters for geographic points and coordinate
/// units otherwise.
pub const DEFAULT_SEARCH_BOX_EDGE: f64 = 2000.0;

/// Factor applied to a candidate's distance to get the next probe box edge.
pub const DEFAULT_SHRINK_FACTOR: f64 = 2.0;

/// How the projection distance of a polyline query is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectionMode {
    /// Distance from the start of the nearest segment to the projected point.
    #[default]
    Simple,
    /// Arc length from the start of the polyline to the projected point.
    Accumulate,
}

/// Tuning of the box-pruned nearest segment search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    initial_box_edge: f64,
    shrink_factor: f64,
}

impl SearchConfig {
    /// Creates a search configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_box_edge` is not a positive finite number
    /// or `shrink_factor` is below `1` (a smaller box could prune the true
    /// nearest segment).
    pub fn new(initial_box_edge: f64, shrink_factor: f64) -> Result<Self> {
        if !(initial_box_edge.is_finite() && initial_box_edge > 0.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "initial_box_edge",
                value: initial_box_edge,
                min: 0.0,
                max: f64::MAX,
            }
            .into());
        }
        if !(shrink_factor.is_finite() && shrink_factor >= 1.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "shrink_factor",
                value: shrink_factor,
                min: 1.0,
                max: f64::MAX,
            }
            .into());
        }
        Ok(Self {
            initial_box_edge,
            shrink_factor,
        })
    }

    /// Returns the edge of the first probe box.
    #[must_use]
    pub fn initial_box_edge(&self) -> f64 {
        self.initial_box_edge
    }

    /// Returns the factor applied to candidate distances.
    #[must_use]
    pub fn shrink_factor(&self) -> f64 {
        self.shrink_factor
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial_box_edge: DEFAULT_SEARCH_BOX_EDGE,
            shrink_factor: DEFAULT_SHRINK_FACTOR,
        }
    }
}

/// Result of a point-to-polyline query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineDistanceResult<S, const D: usize> {
    /// Distance from the query point to the nearest segment.
    pub distance: f64,
    /// Distance along the polyline to the projected point; see [`ProjectionMode`].
    pub projection_distance: f64,
    /// Index of the nearest segment (`0` for a single-vertex polyline).
    pub segment_index: usize,
    /// The query point projected onto the nearest segment.
    pub closest: Point<S, D>,
}

/// Finds the segment of a polyline nearest to a point, and how far along the
/// polyline the point projects.
///
/// Segments are scanned once. A probe box around the query point, initially
/// [`DEFAULT_SEARCH_BOX_EDGE`], skips segments that do not reach it; each
/// candidate that improves the bound shrinks the box to
/// `shrink_factor * distance`. If no segment improves on the initial box the
/// whole polyline is scanned without pruning.
pub struct PolylineDistance<'a, S, const D: usize> {
    point: Point<S, D>,
    polyline: &'a [Point<S, D>],
    mode: ProjectionMode,
    config: SearchConfig,
}

impl<'a, S: CoordinateSystem, const D: usize> PolylineDistance<'a, S, D>
where
    Dim<D>: SupportedDim,
{
    /// Creates a new query in [`ProjectionMode::Simple`] with the default
    /// search configuration.
    #[must_use]
    pub fn new(point: Point<S, D>, polyline: &'a [Point<S, D>]) -> Self {
        Self {
            point,
            polyline,
            mode: ProjectionMode::Simple,
            config: SearchConfig::default(),
        }
    }

    /// Sets the projection mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ProjectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the search configuration.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Executes the query. Returns `None` for an empty polyline.
    ///
    /// A single-vertex polyline measures as that vertex with a projection
    /// distance of `0`.
    #[must_use]
    pub fn execute(&self) -> Option<PolylineDistanceResult<S, D>> {
        if let [only] = self.polyline {
            return Some(PolylineDistanceResult {
                distance: self.point.distance_to(only),
                projection_distance: 0.0,
                segment_index: 0,
                closest: *only,
            });
        }

        let segment_index = self.nearest_segment();
        let segment = segment_at(self.polyline, segment_index)?;

        let offset = match self.mode {
            ProjectionMode::Simple => 0.0,
            ProjectionMode::Accumulate => segments(self.polyline)
                .take(segment_index)
                .map(|seg| seg.length())
                .sum(),
        };

        let closest = closest_point(&self.point, &segment);
        Some(PolylineDistanceResult {
            distance: segment.distance_from(&self.point),
            projection_distance: offset + segment.first.distance_to(&closest),
            segment_index,
            closest,
        })
    }

    /// Index of the nearest segment. Meaningless below two vertices.
    fn nearest_segment(&self) -> usize {
        let mut search_box_size = self.config.initial_box_edge;
        let mut best = None;
        let mut evaluated = 0_usize;

        for (i, seg) in segments(self.polyline).enumerate() {
            if !intersects(&seg, &make_box(&self.point, search_box_size)) {
                continue;
            }
            evaluated += 1;
            let d = seg.distance_from(&self.point) * self.config.shrink_factor;
            if d < search_box_size {
                search_box_size = d;
                best = Some(i);
            }
        }

        tracing::debug!(
            segments = self.polyline.len().saturating_sub(1),
            evaluated,
            best = ?best,
            "pruned polyline scan"
        );

        best.unwrap_or_else(|| {
            tracing::debug!(
                initial_box_edge = self.config.initial_box_edge,
                "no segment within the initial search box, scanning all segments"
            );
            self.exhaustive_nearest()
        })
    }

    fn exhaustive_nearest(&self) -> usize {
        let mut best_index = 0;
        let mut best = f64::INFINITY;
        for (i, seg) in segments(self.polyline).enumerate() {
            let d = seg.distance_from(&self.point);
            if d < best {
                best = d;
                best_index = i;
            }
        }
        best_index
    }
}

/// Returns `(nearest_distance, projection_distance)` from `point` to
/// `polyline`, using the default search configuration.
///
/// An empty polyline yields `(-1.0, 0.0)`: a negative distance means there is
/// no geometry to measure against. A single vertex yields its distance and a
/// projection distance of `0`.
#[must_use]
pub fn polyline_distance<S: CoordinateSystem, const D: usize>(
    point: &Point<S, D>,
    polyline: &[Point<S, D>],
    mode: ProjectionMode,
) -> (f64, f64)
where
    Dim<D>: SupportedDim,
{
    PolylineDistance::new(*point, polyline)
        .with_mode(mode)
        .execute()
        .map_or((-1.0, 0.0), |r| (r.distance, r.projection_distance))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SimplegeomError;
    use crate::geometry::{LineString, Point2, Point3, PointGeo2, Segment};
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-12;

    fn diagonal() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 2.0),
        ]
    }

    /// Deterministic zig-zag polyline with irregular spacing.
    fn zigzag(n: u32) -> Vec<Point2> {
        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            f64::from(u32::try_from(state % 10_000).unwrap()) / 10_000.0
        };
        (0..n)
            .map(|i| Point2::new(f64::from(i) * 3.0 + next(), next() * 40.0 - 20.0))
            .collect()
    }

    fn brute_force(point: &Point2, line: &[Point2]) -> f64 {
        line.windows(2)
            .map(|w| Segment::new(w[0], w[1]).distance_from(point))
            .fold(f64::INFINITY, f64::min)
    }

    #[test]
    fn empty_polyline_is_sentinel() {
        let empty: Vec<Point2> = Vec::new();
        assert_eq!(
            polyline_distance(&Point2::new(1.0, 1.0), &empty, ProjectionMode::Accumulate),
            (-1.0, 0.0)
        );
        assert!(PolylineDistance::new(Point2::new(1.0, 1.0), &empty)
            .execute()
            .is_none());
    }

    #[test]
    fn single_vertex_polyline() {
        let line = [Point2::new(0.0, 0.0)];
        let (d, proj) = polyline_distance(&Point2::new(3.0, 4.0), &line, ProjectionMode::Accumulate);
        assert!((d - 5.0).abs() < TOL);
        assert!(proj.abs() < TOL);
    }

    #[test]
    fn diagonal_end_point_accumulates_both_segments() {
        let (d, proj) =
            polyline_distance(&Point2::new(2.0, 2.0), &diagonal(), ProjectionMode::Accumulate);
        assert!(d.abs() < TOL, "d={d}");
        assert!((proj - 2.0 * 2.0_f64.sqrt()).abs() < TOL, "proj={proj}");
    }

    #[test]
    fn diagonal_end_point_simple_is_local() {
        let (d, proj) =
            polyline_distance(&Point2::new(2.0, 2.0), &diagonal(), ProjectionMode::Simple);
        assert!(d.abs() < TOL);
        assert!((proj - 2.0_f64.sqrt()).abs() < TOL, "proj={proj}");
    }

    #[test]
    fn reports_segment_and_closest_point() {
        let line = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
        ];
        let result = PolylineDistance::new(Point2::new(12.0, 4.0), &line)
            .with_mode(ProjectionMode::Accumulate)
            .execute()
            .unwrap();
        assert_eq!(result.segment_index, 1);
        assert_eq!(result.closest, Point2::new(10.0, 4.0));
        assert!((result.distance - 2.0).abs() < TOL);
        assert!((result.projection_distance - 14.0).abs() < TOL);
    }

    #[test]
    fn matches_brute_force_minimum() {
        let line = zigzag(40);
        for i in -4..=44 {
            for j in -6..=6 {
                let p = Point2::new(f64::from(i) * 3.1, f64::from(j) * 4.7);
                let (d, _) = polyline_distance(&p, &line, ProjectionMode::Simple);
                let expected = brute_force(&p, &line);
                assert!(d >= 0.0);
                assert!((d - expected).abs() < TOL, "p={p:?} d={d} expected={expected}");
            }
        }
    }

    #[test]
    fn far_query_point_falls_back_to_full_scan() {
        let line = [
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
        ];
        let p = Point2::new(5000.0, 10.0);
        let result = PolylineDistance::new(p, &line)
            .with_mode(ProjectionMode::Accumulate)
            .execute()
            .unwrap();
        assert_eq!(result.segment_index, 1);
        assert!((result.distance - 4990.0).abs() < 1e-9);
        assert!((result.projection_distance - 20.0).abs() < 1e-9);
        assert!((result.distance - brute_force(&p, &line)).abs() < TOL);
    }

    #[test]
    fn accumulate_is_monotonic_at_vertices() {
        let line = zigzag(25);
        let mut previous = -1.0;
        for (k, vertex) in line.iter().enumerate() {
            let (d, proj) = polyline_distance(vertex, &line, ProjectionMode::Accumulate);
            assert!(d.abs() < TOL, "vertex {k} d={d}");
            assert!(proj >= previous, "vertex {k}: {proj} < {previous}");
            previous = proj;
        }
        let total: LineString<_, 2> = line.into_iter().collect();
        assert!((previous - total.length()).abs() < 1e-9);
    }

    #[test]
    fn three_dimensional_polyline() {
        let line = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(0.0, 4.0, 5.0),
        ];
        let (d, proj) =
            polyline_distance(&Point3::new(1.0, 2.0, 5.0), &line, ProjectionMode::Accumulate);
        assert!((d - 1.0).abs() < TOL, "d={d}");
        assert!((proj - 7.0).abs() < TOL, "proj={proj}");
    }

    #[test]
    fn geographic_polyline_along_equator() {
        let line = [
            PointGeo2::new(0.0, 0.0),
            PointGeo2::new(0.01, 0.0),
            PointGeo2::new(0.02, 0.0),
        ];
        let query = PointGeo2::new(0.015, 0.001);

        let result = PolylineDistance::new(query, &line)
            .with_mode(ProjectionMode::Accumulate)
            .execute()
            .unwrap();
        assert_eq!(result.segment_index, 1);
        assert_abs_diff_eq!(result.distance, 110.574, epsilon = 0.01);
        // 0.015° of equator.
        assert_abs_diff_eq!(result.projection_distance, 1669.792, epsilon = 0.01);

        let (_, simple) = polyline_distance(&query, &line, ProjectionMode::Simple);
        assert_abs_diff_eq!(simple, 556.597, epsilon = 0.01);
    }

    #[test]
    fn high_latitude_east_segment_is_not_pruned() {
        // About 800 m due north, then a turn to a meridian about 600 m east.
        let line = [
            PointGeo2::new(9.99, 60.0072),
            PointGeo2::new(10.01, 60.0072),
            PointGeo2::new(10.0108, 60.01),
            PointGeo2::new(10.0108, 59.99),
        ];
        let query = PointGeo2::new(10.0, 60.0);

        let result = PolylineDistance::new(query, &line).execute().unwrap();
        let brute = line[..].distance_from(&query);
        assert_eq!(result.segment_index, 2);
        assert!((result.distance - brute).abs() < 1e-6, "{} vs {brute}", result.distance);
        assert!(result.distance < 700.0, "d={}", result.distance);
    }

    #[test]
    fn geographic_matches_brute_force_at_high_latitude() {
        let line: Vec<PointGeo2> = zigzag(20)
            .iter()
            .map(|p| PointGeo2::new(10.0 + p.x() * 0.002, 60.0 + p.y() * 0.0005))
            .collect();
        for i in -2..=14 {
            for j in -3..=3 {
                let query =
                    PointGeo2::new(10.0 + f64::from(i) * 0.009, 60.0 + f64::from(j) * 0.004);
                let (d, _) = polyline_distance(&query, &line, ProjectionMode::Simple);
                let brute = line[..].distance_from(&query);
                assert!((d - brute).abs() < 1e-6, "query={query:?} d={d} brute={brute}");
            }
        }
    }

    #[test]
    fn unit_shrink_factor_still_finds_minimum() {
        let line = zigzag(30);
        let config = SearchConfig::new(50.0, 1.0).unwrap();
        for i in 0..20 {
            let p = Point2::new(f64::from(i) * 4.3, 7.0);
            let result = PolylineDistance::new(p, &line)
                .with_config(config)
                .execute()
                .unwrap();
            assert!((result.distance - brute_force(&p, &line)).abs() < TOL);
        }
    }

    #[test]
    fn config_rejects_bad_values() {
        assert!(matches!(
            SearchConfig::new(0.0, 2.0),
            Err(SimplegeomError::Geometry(GeometryError::ParameterOutOfRange {
                parameter: "initial_box_edge",
                ..
            }))
        ));
        assert!(matches!(
            SearchConfig::new(f64::NAN, 2.0),
            Err(SimplegeomError::Geometry(GeometryError::ParameterOutOfRange { .. }))
        ));
        assert!(matches!(
            SearchConfig::new(100.0, 0.5),
            Err(SimplegeomError::Geometry(GeometryError::ParameterOutOfRange {
                parameter: "shrink_factor",
                ..
            }))
        ));
        let default = SearchConfig::default();
        assert!((default.initial_box_edge() - DEFAULT_SEARCH_BOX_EDGE).abs() < TOL);
        assert!((default.shrink_factor() - DEFAULT_SHRINK_FACTOR).abs() < TOL);
    }
}
