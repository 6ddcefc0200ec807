//! Axis-aligned rectangle representation.

use nalgebra::{Point2, Vector2};

use crate::polygon::check_finite;
use crate::PolygonError;

/// An axis-aligned rectangle, defined by its minimum corner and its size.
///
/// The four vertices are:
/// - `origin`
/// - `origin + (width, 0)`
/// - `origin + (width, height)`
/// - `origin + (0, height)`
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    origin: Point2<f32>,
    width: f32,
    height: f32,
}

impl Rectangle {
    /// Creates a new rectangle from its minimum corner and size.
    ///
    /// # Errors
    /// [`PolygonError::NonFiniteVertex`] if any of the four vertices is not finite,
    /// indexed in [`Rectangle::vertices`] order.
    pub fn new(origin: Point2<f32>, width: f32, height: f32) -> Result<Self, PolygonError> {
        let rectangle = Self {
            origin,
            width,
            height,
        };
        check_finite(&rectangle.vertices())?;
        Ok(rectangle)
    }

    /// Creates the rectangle spanned by two opposite corners, in any order.
    ///
    /// # Errors
    /// [`PolygonError::NonFiniteVertex`] indexing the offending corner (`a` is 0).
    pub fn from_corners(a: Point2<f32>, b: Point2<f32>) -> Result<Self, PolygonError> {
        // `inf`/`sup` would silently drop a NaN coordinate.
        check_finite(&[a, b])?;
        let min = a.inf(&b);
        let max = a.sup(&b);
        Self::new(min, max.x - min.x, max.y - min.y)
    }

    #[inline]
    pub fn origin(&self) -> Point2<f32> {
        self.origin
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the four vertices of the rectangle.
    ///
    /// Order: counter-clockwise from `origin` (y axis up).
    pub fn vertices(&self) -> [Point2<f32>; 4] {
        let u = Vector2::new(self.width, 0.0);
        let v = Vector2::new(0.0, self.height);
        [
            self.origin,
            self.origin + u,
            self.origin + u + v,
            self.origin + v,
        ]
    }

    /// Computes the centroid (center) of the rectangle.
    pub fn centroid(&self) -> Point2<f32> {
        self.origin + Vector2::new(self.width, self.height) * 0.5
    }

    /// Computes the area of the rectangle.
    pub fn area(&self) -> f32 {
        (self.width * self.height).abs()
    }
}
