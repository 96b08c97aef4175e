//! Small walkthrough of the distance queries.
//!
//! ```text
//! cargo run --example demo
//! RUST_LOG=simplegeom=debug cargo run --example demo
//! ```

use std::time::Instant;

use simplegeom::geometry::{LineString, Point2, PointGeo2};
use simplegeom::io::ToWkt;
use simplegeom::operations::query::{distance, polyline_distance, ProjectionMode};

fn main() {
    // Default: WARN for everything, INFO for the demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=simplegeom=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("demo=info".parse().unwrap_or_default())
        .add_directive("simplegeom=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let point1 = Point2::new(0.5, 0.5);
    let point2 = Point2::new(2.0, 2.0);
    let line: LineString<_, 2> = vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(2.0, 2.0),
    ]
    .into();

    let start = Instant::now();
    let d = distance(&point1, &point2);
    tracing::info!(elapsed = ?start.elapsed(), "point distance");
    println!("distance {} -> {}: {d}", point1.to_wkt(), point2.to_wkt());

    let start = Instant::now();
    let (nearest, along) = polyline_distance(&point2, line.points(), ProjectionMode::Accumulate);
    tracing::info!(elapsed = ?start.elapsed(), "polyline distance");
    println!("{} to {}: distance {nearest}, projection {along}", point2.to_wkt(), line.to_wkt());

    let beijing = PointGeo2::new(116.391_275, 39.907_23);
    let shanghai = PointGeo2::new(121.473_701, 31.230_416);
    println!(
        "{} -> {}: {:.3} m",
        beijing.to_wkt(),
        shanghai.to_wkt(),
        distance(&beijing, &shanghai)
    );
}
