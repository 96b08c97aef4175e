use std::fmt::Debug;

use crate::error::GeometryError;
use crate::math::projection::{lerp, segment_parameter};
use crate::math::{geodesic_distance, Coords, VectorN, GEOGRAPHIC_FACTOR};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Cartesian {}
    impl Sealed for super::Geographic {}
}

/// Runtime tag for a coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystemKind {
    /// Flat Euclidean space.
    Planar,
    /// Longitude/latitude in degrees on an ellipsoidal Earth.
    Geographic,
}

/// Distance strategy and conventions of a coordinate system.
///
/// Implemented only by [`Cartesian`] and [`Geographic`]. Geometries carry the
/// system as a type parameter, so mixing systems in one computation does not
/// compile.
pub trait CoordinateSystem:
    sealed::Sealed + Debug + Clone + Copy + PartialEq + Default + Send + Sync + 'static
{
    /// Runtime tag of this system.
    const KIND: CoordinateSystemKind;

    /// Number of decimals written for each coordinate in WKT output.
    const WKT_PRECISION: usize;

    /// Distance between two positions in this system's linear unit.
    fn distance<const D: usize>(a: &Coords<D>, b: &Coords<D>) -> f64;

    /// Distance from `p` to the closed segment `a`–`b`.
    fn segment_distance<const D: usize>(p: &Coords<D>, a: &Coords<D>, b: &Coords<D>) -> f64;

    /// Per-axis half extent of a probe box around `center` whose size is
    /// `edge_length` in this system's linear unit.
    fn probe_half_extent<const D: usize>(center: &Coords<D>, edge_length: f64) -> VectorN<D>;

    /// Checks system-specific coordinate ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate lies outside the system's domain.
    fn validate(coords: &[f64]) -> Result<(), GeometryError>;
}

/// Planar coordinates, Euclidean metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cartesian;

/// Geographic coordinates in degrees (longitude, latitude[, altitude]).
///
/// Distances are WGS84 geodesic distances in meters; altitude does not
/// contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Geographic;

impl CoordinateSystem for Cartesian {
    const KIND: CoordinateSystemKind = CoordinateSystemKind::Planar;
    const WKT_PRECISION: usize = 2;

    fn distance<const D: usize>(a: &Coords<D>, b: &Coords<D>) -> f64 {
        nalgebra::distance(a, b)
    }

    fn segment_distance<const D: usize>(p: &Coords<D>, a: &Coords<D>, b: &Coords<D>) -> f64 {
        let closest = lerp(a, b, segment_parameter(p, a, b));
        nalgebra::distance(p, &closest)
    }

    fn probe_half_extent<const D: usize>(_center: &Coords<D>, edge_length: f64) -> VectorN<D> {
        VectorN::repeat(edge_length)
    }

    fn validate(_coords: &[f64]) -> Result<(), GeometryError> {
        Ok(())
    }
}

/// Evenly spaced samples taken along a geographic segment before refinement.
const SEGMENT_SAMPLES: u32 = 16;

/// Golden-section steps used to refine the best sample.
const REFINE_ITERATIONS: usize = 40;

/// `1 / φ`, the golden-section shrink ratio.
const INV_GOLDEN: f64 = 0.618_033_988_749_894_8;

/// Cosine of the highest latitude whose longitude extent is still bounded.
const MIN_LATITUDE_COS: f64 = 1e-6;

impl CoordinateSystem for Geographic {
    const KIND: CoordinateSystemKind = CoordinateSystemKind::Geographic;
    const WKT_PRECISION: usize = 7;

    fn distance<const D: usize>(a: &Coords<D>, b: &Coords<D>) -> f64 {
        geodesic_distance(a[0], a[1], b[0], b[1])
    }

    /// The segment is the straight line between its endpoints in degree
    /// space. The geodesic distance is minimised along it: the projection
    /// foot and 17 evenly spaced samples seed a golden-section search around
    /// the best sample, about 60 geodesic solves per segment. The result never
    /// exceeds the distance to either endpoint or to the projection foot.
    #[allow(clippy::float_cmp)]
    fn segment_distance<const D: usize>(p: &Coords<D>, a: &Coords<D>, b: &Coords<D>) -> f64 {
        let at = |t: f64| Self::distance(p, &lerp(a, b, t));

        if (b - a).norm_squared() == 0.0 {
            return at(0.0);
        }

        let mut best_t = segment_parameter(p, a, b);
        let mut best = at(best_t);
        for i in 0..=SEGMENT_SAMPLES {
            let t = f64::from(i) / f64::from(SEGMENT_SAMPLES);
            let d = at(t);
            if d < best {
                best = d;
                best_t = t;
            }
        }

        let dt = 1.0 / f64::from(SEGMENT_SAMPLES);
        let mut lo = (best_t - dt).max(0.0);
        let mut hi = (best_t + dt).min(1.0);
        let mut x1 = hi - INV_GOLDEN * (hi - lo);
        let mut x2 = lo + INV_GOLDEN * (hi - lo);
        let mut f1 = at(x1);
        let mut f2 = at(x2);
        for _ in 0..REFINE_ITERATIONS {
            if f1 < f2 {
                hi = x2;
                x2 = x1;
                f2 = f1;
                x1 = hi - INV_GOLDEN * (hi - lo);
                f1 = at(x1);
            } else {
                lo = x1;
                x1 = x2;
                f1 = f2;
                x2 = lo + INV_GOLDEN * (hi - lo);
                f2 = at(x2);
            }
        }

        best.min(f1).min(f2)
    }

    /// Latitude spans `edge_length * GEOGRAPHIC_FACTOR` degrees. Longitude is
    /// widened by `1 / cos(lat)` at the box's most poleward latitude so the
    /// box reaches as far east and west as it does north and south; a box
    /// touching a pole spans every longitude. Altitude is unbounded.
    fn probe_half_extent<const D: usize>(center: &Coords<D>, edge_length: f64) -> VectorN<D> {
        let lat_half = edge_length * GEOGRAPHIC_FACTOR;
        let poleward = (center[1].abs() + lat_half).min(90.0);
        let cos = poleward.to_radians().cos();
        let lon_half = if cos > MIN_LATITUDE_COS {
            lat_half / cos
        } else {
            f64::INFINITY
        };
        VectorN::from_fn(|axis, _| match axis {
            0 => lon_half,
            1 => lat_half,
            _ => f64::INFINITY,
        })
    }

    fn validate(coords: &[f64]) -> Result<(), GeometryError> {
        match coords.get(1) {
            Some(&lat) if !(-90.0..=90.0).contains(&lat) => {
                Err(GeometryError::ParameterOutOfRange {
                    parameter: "latitude",
                    value: lat,
                    min: -90.0,
                    max: 90.0,
                })
            }
            _ => Ok(()),
        }
    }
}
