//! Triangle representation.

use nalgebra::Point2;

use crate::polygon::check_finite;
use crate::PolygonError;

/// A triangle in the plane, defined by three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point2<f32>; 3],
}

impl Triangle {
    /// Creates a new triangle from three points.
    ///
    /// The winding order is kept as given.
    ///
    /// # Errors
    /// [`PolygonError::NonFiniteVertex`] if any coordinate is NaN or infinite.
    pub fn new(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> Result<Self, PolygonError> {
        let vertices = [a, b, c];
        check_finite(&vertices)?;
        Ok(Self { vertices })
    }

    /// Returns the three vertices of the triangle.
    #[inline]
    pub fn vertices(&self) -> &[Point2<f32>; 3] {
        &self.vertices
    }

    /// Computes the signed area, positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f32 {
        let [a, b, c] = &self.vertices;
        let ab = b - a;
        let ac = c - a;
        0.5 * ab.perp(&ac)
    }

    /// Computes the centroid (center of mass) of the triangle.
    pub fn centroid(&self) -> Point2<f32> {
        let [a, b, c] = &self.vertices;
        Point2::from((a.coords + b.coords + c.coords) / 3.0)
    }
}
