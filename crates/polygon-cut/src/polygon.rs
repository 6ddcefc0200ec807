//! Polygon representation as a closed ring of 2D vertices.

use nalgebra::{Point2, Vector2};

use crate::{PolygonError, Rectangle, Segment, Triangle};

/// A simple polygon, defined by an ordered ring of vertices.
///
/// The edge from the last vertex back to the first is implicit. Simplicity
/// (no self-intersection) is assumed, not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2<f32>>,
}

impl Polygon {
    /// Creates a new polygon from a list of vertices.
    ///
    /// # Errors
    /// - [`PolygonError::TooFewVertices`] if fewer than 3 vertices are provided.
    /// - [`PolygonError::NonFiniteVertex`] if any coordinate is NaN or infinite.
    pub fn new(vertices: Vec<Point2<f32>>) -> Result<Self, PolygonError> {
        if vertices.len() < 3 {
            return Err(PolygonError::TooFewVertices {
                count: vertices.len(),
            });
        }
        check_finite(&vertices)?;
        Ok(Self { vertices })
    }

    /// Returns the vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point2<f32>] {
        &self.vertices
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices (always false for valid polygons).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the boundary edges in ring order, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Computes the signed area with the shoelace formula.
    ///
    /// Positive for counter-clockwise winding (y axis up), negative for clockwise.
    pub fn signed_area(&self) -> f32 {
        let twice: f32 = self
            .edges()
            .map(|e| e.start().x * e.end().y - e.end().x * e.start().y)
            .sum();
        twice * 0.5
    }

    /// Computes the enclosed area, independent of winding.
    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Computes the centroid as the average of the vertices.
    pub fn centroid(&self) -> Point2<f32> {
        let sum: Vector2<f32> = self.vertices.iter().map(|p| p.coords).sum();
        Point2::from(sum / self.vertices.len() as f32)
    }

    /// Returns the axis-aligned bounding rectangle as `(min, max)` corners.
    pub fn bounds(&self) -> (Point2<f32>, Point2<f32>) {
        let first = self.vertices[0];
        self.vertices[1..]
            .iter()
            .fold((first, first), |(min, max), v| (min.inf(v), max.sup(v)))
    }
}

/// Fails on the first vertex with a NaN or infinite coordinate.
pub(crate) fn check_finite(vertices: &[Point2<f32>]) -> Result<(), PolygonError> {
    match vertices
        .iter()
        .enumerate()
        .find(|(_, v)| !(v.x.is_finite() && v.y.is_finite()))
    {
        Some((index, v)) => Err(PolygonError::NonFiniteVertex {
            index,
            x: v.x,
            y: v.y,
        }),
        None => Ok(()),
    }
}

// Shapes validate their vertices on construction, so these conversions cannot fail.

impl From<Triangle> for Polygon {
    fn from(triangle: Triangle) -> Self {
        Self {
            vertices: triangle.vertices().to_vec(),
        }
    }
}

impl From<&Triangle> for Polygon {
    fn from(triangle: &Triangle) -> Self {
        Self {
            vertices: triangle.vertices().to_vec(),
        }
    }
}

impl From<Rectangle> for Polygon {
    fn from(rectangle: Rectangle) -> Self {
        Self {
            vertices: rectangle.vertices().to_vec(),
        }
    }
}

impl From<&Rectangle> for Polygon {
    fn from(rectangle: &Rectangle) -> Self {
        Self {
            vertices: rectangle.vertices().to_vec(),
        }
    }
}
