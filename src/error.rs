use thiserror::Error;

/// Errors returned when a hull cannot be built from the given points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than two distinct points were supplied, so there is no pair of
    /// extreme points to start from.
    #[error("at least 2 distinct points are required, got {distinct}")]
    InsufficientPoints {
        /// Number of distinct points found in the input (0 or 1).
        distinct: usize,
    },
    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input.
        index: usize,
    },
    /// A point has a coordinate so large that orientation tests against it
    /// would overflow.
    #[error("point {index} has a coordinate beyond the supported range")]
    CoordinateOutOfRange {
        /// Position of the offending point in the input.
        index: usize,
    },
}
