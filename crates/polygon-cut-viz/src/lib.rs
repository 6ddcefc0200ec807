//! Shared visualization utilities for the interactive polygon cutter.

use macroquad::prelude::*;
use nalgebra::Point2;
use polygon_cut::{Polygon, Segment};

pub mod scene;
pub mod session;

pub use scene::Scene;
pub use session::{CutSession, SessionState};

/// Outline color of the uncut polygon.
pub const SOURCE_COLOR: Color = BLACK;
/// Color of the cut being dragged.
pub const CUT_COLOR: Color = RED;
/// Colors of the two pieces after a split.
pub const PIECE_COLORS: [Color; 2] = [BLUE, GREEN];

/// Converts a nalgebra point into a macroquad vector.
#[inline]
pub fn to_vec2(p: &Point2<f32>) -> Vec2 {
    vec2(p.x, p.y)
}

/// Draws the closed outline of a polygon.
pub fn draw_polygon_outline(polygon: &Polygon, thickness: f32, color: Color) {
    draw_ring(polygon.vertices(), thickness, color);
}

/// Draws a closed ring through `points`.
///
/// Logs an error and draws nothing for fewer than 2 points.
pub fn draw_ring(points: &[Point2<f32>], thickness: f32, color: Color) {
    if points.len() < 2 {
        tracing::error!(count = points.len(), "not enough points to draw a ring");
        return;
    }

    let n = points.len();
    for i in 0..n {
        let a = to_vec2(&points[i]);
        let b = to_vec2(&points[(i + 1) % n]);
        draw_line(a.x, a.y, b.x, b.y, thickness, color);
    }
}

/// Draws an open path through `points`.
pub fn draw_path(points: &[Point2<f32>], thickness: f32, color: Color) {
    for pair in points.windows(2) {
        let a = to_vec2(&pair[0]);
        let b = to_vec2(&pair[1]);
        draw_line(a.x, a.y, b.x, b.y, thickness, color);
    }
}

/// Draws a segment with small markers on both endpoints.
pub fn draw_segment(segment: &Segment, thickness: f32, color: Color) {
    let a = to_vec2(&segment.start());
    let b = to_vec2(&segment.end());
    draw_line(a.x, a.y, b.x, b.y, thickness, color);
    draw_circle(a.x, a.y, thickness * 2.0, color);
    draw_circle(b.x, b.y, thickness * 2.0, color);
}
