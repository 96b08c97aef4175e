pub mod wkt;

pub use wkt::ToWkt;
