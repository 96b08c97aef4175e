pub mod aabb;
pub mod coordinate_system;
pub mod linestring;
pub mod point;
pub mod segment;

pub use aabb::Aabb;
pub use coordinate_system::{Cartesian, CoordinateSystem, CoordinateSystemKind, Geographic};
pub use linestring::{segment_at, segments, LineString};
pub use point::{Dim, Point, Point2, Point3, PointGeo2, PointGeo3, SupportedDim};
pub use segment::Segment;
