//! Errors raised when constructing geometry from invalid input.

/// Reasons a vertex list cannot form a [`Polygon`](crate::Polygon).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum PolygonError {
    /// A closed ring needs at least three vertices.
    #[error("a polygon needs at least 3 vertices, got {count}")]
    TooFewVertices {
        /// Number of vertices that were provided.
        count: usize,
    },
    /// A vertex has a NaN or infinite coordinate.
    #[error("vertex {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteVertex {
        /// Position of the offending vertex in the input.
        index: usize,
        x: f32,
        y: f32,
    },
}
