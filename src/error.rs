//! Error types for fisk operations.

use thiserror::Error;

/// Errors that can occur during art-gallery computations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FiskError {
    /// The observer lies outside the polygon (beyond boundary tolerance).
    #[error("observer lies outside the polygon")]
    ObserverOutsidePolygon,

    /// The visibility sweep produced too few points to form a region.
    #[error("degenerate visibility region: only {points} points survived the sweep")]
    DegenerateVisibility {
        /// Number of distinct boundary points the sweep produced.
        points: usize,
    },

    /// The polygon has fewer than three vertices.
    #[error("polygon has {count} vertices, need at least 3")]
    TooFewVertices {
        /// Number of vertices in the input.
        count: usize,
    },

    /// Two non-adjacent edges of the polygon cross.
    #[error("polygon is self-intersecting")]
    SelfIntersecting,

    /// Ear clipping could not find an ear to remove.
    #[error("no ear found with {remaining} vertices remaining; polygon is not simple")]
    NoEarFound {
        /// Number of vertices still unclipped.
        remaining: usize,
    },
}
