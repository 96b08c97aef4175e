pub mod geodesic;
pub mod projection;

pub use geodesic::geodesic_distance;

/// Raw coordinate storage for a point of dimension `D`.
pub type Coords<const D: usize> = nalgebra::Point<f64, D>;

/// Displacement vector of dimension `D`.
pub type VectorN<const D: usize> = nalgebra::SVector<f64, D>;

/// Degrees of longitude/latitude per meter used when sizing probe boxes
/// around geographic points.
///
/// One degree of latitude is roughly 111 km, so a box sized with this factor
/// covers a little over half of the requested extent along the meridian.
pub const GEOGRAPHIC_FACTOR: f64 = 1.0 / 2.0 / 1e5;
