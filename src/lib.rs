//! Point, segment and polyline distance queries over planar and geographic
//! coordinates.
//!
//! ```
//! use simplegeom::geometry::Point2;
//! use simplegeom::operations::query::{polyline_distance, ProjectionMode};
//!
//! let line = [Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)];
//! let (distance, along) = polyline_distance(&Point2::new(2.0, 1.0), &line, ProjectionMode::Simple);
//! assert!((distance - 0.5_f64.sqrt()).abs() < 1e-12);
//! assert!((along - 0.5_f64.sqrt()).abs() < 1e-12);
//! ```

pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod operations;

pub use error::{Result, SimplegeomError};
