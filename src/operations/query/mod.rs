mod closest_point;
mod distance;
mod intersect_box;
mod polyline_distance;

pub use closest_point::{closest_point, project, Projection};
pub use distance::{distance, PointDistance};
pub use intersect_box::intersects;
pub use polyline_distance::{
    polyline_distance, PolylineDistance, PolylineDistanceResult, ProjectionMode, SearchConfig,
    DEFAULT_SEARCH_BOX_EDGE, DEFAULT_SHRINK_FACTOR,
};
