use thiserror::Error;

/// Top-level error type for the simplegeom crate.
#[derive(Debug, Error)]
pub enum SimplegeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to constructing or parameterising geometry.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("expected {expected} coordinates, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("coordinate {axis} is not finite: {value}")]
    NonFiniteCoordinate { axis: usize, value: f64 },
}

/// Convenience type alias for results using [`SimplegeomError`].
pub type Result<T> = std::result::Result<T, SimplegeomError>;
