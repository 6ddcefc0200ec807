//! Splitting simple 2D polygons along a straight cut.
//!
//! The crate is pure geometry: it takes a [`Polygon`] and a cut [`Segment`]
//! and returns either two new polygons or [`SplitResult::NoSplit`]. No state is
//! kept between calls.
//!
//! # Example
//!
//! ```
//! use polygon_cut::{split, Point, Polygon, Segment, SplitResult};
//!
//! let square = Polygon::new(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ])?;
//! let cut = Segment::new(Point::new(-5.0, 5.0), Point::new(15.0, 5.0));
//!
//! let SplitResult::Split(bottom, top) = split(&square, &cut) else {
//!     panic!("the cut crosses the square");
//! };
//! assert_eq!(bottom.len(), 4);
//! assert_eq!(top.len(), 4);
//! # Ok::<(), polygon_cut::PolygonError>(())
//! ```

mod cuttable;
mod error;
mod polygon;
mod rectangle;
mod segment;
mod triangle;

pub use cuttable::{split, split_with_epsilon, Cuttable, SplitResult};
pub use error::PolygonError;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use segment::{
    crossing_with_epsilon, intersect, intersect_with_epsilon, Crossing, Intersection, Segment,
    INTERSECTION_EPSILON,
};
pub use triangle::Triangle;

/// A point in the plane.
pub type Point = nalgebra::Point2<f32>;
