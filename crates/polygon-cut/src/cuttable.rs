//! Splitting polygons along a straight cut segment.

use log::{debug, trace};
use nalgebra::Point2;

use crate::{crossing_with_epsilon, Polygon, Rectangle, Segment, Triangle, INTERSECTION_EPSILON};

/// Lower bound on the tolerance used to place vertices on the cut.
const VERTEX_SNAP: f32 = f32::EPSILON * 64.0;

/// Outcome of cutting a polygon.
#[derive(Debug, Clone, PartialEq)]
pub enum SplitResult {
    /// The cut does not divide the polygon into two pieces.
    NoSplit,
    /// The two pieces, each sharing both crossing points of the cut.
    Split(Polygon, Polygon),
}

impl SplitResult {
    /// Returns true if the cut produced two pieces.
    #[inline]
    pub fn is_split(&self) -> bool {
        matches!(self, SplitResult::Split(..))
    }

    /// Returns the two pieces, if any.
    pub fn into_polygons(self) -> Option<(Polygon, Polygon)> {
        match self {
            SplitResult::Split(first, second) => Some((first, second)),
            SplitResult::NoSplit => None,
        }
    }
}

/// Trait for geometry that can be cut by a segment.
pub trait Cuttable {
    /// Cuts the geometry along `cut`.
    ///
    /// # Return values
    ///
    /// - **Split**: the cut crosses the boundary exactly twice, yielding two pieces
    /// - **NoSplit**: the cut misses, only touches, or only partially enters the shape
    fn cut(&self, cut: &Segment) -> SplitResult;
}

impl Cuttable for Polygon {
    fn cut(&self, cut: &Segment) -> SplitResult {
        split(self, cut)
    }
}

impl Cuttable for Triangle {
    fn cut(&self, cut: &Segment) -> SplitResult {
        Polygon::from(self).cut(cut)
    }
}

impl Cuttable for Rectangle {
    fn cut(&self, cut: &Segment) -> SplitResult {
        Polygon::from(self).cut(cut)
    }
}

/// Splits a polygon along a cut segment using the default [`INTERSECTION_EPSILON`].
#[inline]
pub fn split(polygon: &Polygon, cut: &Segment) -> SplitResult {
    split_with_epsilon(polygon, cut, INTERSECTION_EPSILON)
}

/// Splits a polygon along a cut segment with a custom tolerance.
///
/// Walks the boundary once, appending each vertex to the currently active
/// piece. Every crossing is appended to both pieces and switches the active
/// piece, so the vertices between the two crossings end up in the second
/// piece and the rest in the first.
///
/// Each vertex is first placed left of, right of, or on the cut line, with
/// vertices within `epsilon` times the size of the polygon counted as on it.
/// A vertex on the cut is a crossing itself. An edge contributes a crossing
/// only when its ends lie strictly on opposite sides and the intersector
/// places the crossing on the cut. This way a cut through a vertex is
/// counted once, whichever adjacent edge the rounding favours. Even with an
/// `epsilon` of `0.0` a few ulps of slack are kept for this test.
///
/// Returns [`SplitResult::NoSplit`] unless exactly two distinct crossings
/// were found and both pieces keep at least 3 vertices.
pub fn split_with_epsilon(polygon: &Polygon, cut: &Segment, epsilon: f32) -> SplitResult {
    let length = cut.length();
    if length == 0.0 {
        debug!("no split: zero-length cut");
        return SplitResult::NoSplit;
    }

    let vertices = polygon.vertices();
    let n = vertices.len();
    let snap = epsilon.max(VERTEX_SNAP);
    let (min, max) = polygon.bounds();
    let tolerance = snap * (max - min).norm().max(length);

    let placements: Vec<Placement> = vertices
        .iter()
        .map(|v| Placement::of(v, cut, tolerance, snap))
        .collect();

    let mut first = Vec::with_capacity(n + 2);
    let mut second = Vec::with_capacity(n + 2);
    let mut crossings: Vec<Hit> = Vec::with_capacity(2);
    let mut in_first = true;

    for (i, edge) in polygon.edges().enumerate() {
        let j = (i + 1) % n;
        if in_first {
            first.push(vertices[i]);
        } else {
            second.push(vertices[i]);
        }

        let crossing = crossing_with_epsilon(cut, &edge, epsilon);
        trace!("edge {i}: {crossing:?}, ends {:?} {:?}", placements[i], placements[j]);

        let hit = match (placements[i], placements[j], crossing) {
            (Placement::OnCut { t }, _, _) => Hit {
                point: vertices[i],
                t,
            },
            (Placement::Left, Placement::Right, Some(c))
            | (Placement::Right, Placement::Left, Some(c)) => Hit {
                point: c.point,
                t: c.t,
            },
            _ => continue,
        };

        if crossings.iter().any(|c| (c.t - hit.t).abs() <= snap) {
            debug!("skipping repeated crossing ({}, {}) on edge {i}", hit.point.x, hit.point.y);
            continue;
        }

        debug!("crossing ({}, {}) on edge {i}", hit.point.x, hit.point.y);
        crossings.push(hit);
        first.push(hit.point);
        second.push(hit.point);
        in_first = !in_first;
    }

    if crossings.len() != 2 {
        debug!("no split: {} distinct crossing(s)", crossings.len());
        return SplitResult::NoSplit;
    }

    let first = dedup_ring(first, tolerance);
    let second = dedup_ring(second, tolerance);

    match (Polygon::new(first), Polygon::new(second)) {
        (Ok(first), Ok(second)) => {
            debug!("split into {} + {} vertices", first.len(), second.len());
            SplitResult::Split(first, second)
        }
        (first, second) => {
            debug!(
                "no split: degenerate piece ({:?}, {:?})",
                first.err(),
                second.err()
            );
            SplitResult::NoSplit
        }
    }
}

/// Where a vertex lies relative to the cut.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Placement {
    /// Strictly left of the cut line, looking from its start to its end.
    Left,
    /// Strictly right of the cut line.
    Right,
    /// On the cut line, but beyond one of the cut's ends.
    OnLine,
    /// On the cut itself, at parameter `t` along it.
    OnCut { t: f32 },
}

impl Placement {
    fn of(v: &Point2<f32>, cut: &Segment, tolerance: f32, snap: f32) -> Self {
        let d = cut.direction();
        let offset = *v - cut.start();
        let length = d.norm();

        let distance = d.perp(&offset) / length;
        if distance > tolerance {
            return Placement::Left;
        }
        if distance < -tolerance {
            return Placement::Right;
        }

        let t = offset.dot(&d) / (length * length);
        if t >= -snap && t <= 1.0 + snap {
            Placement::OnCut {
                t: t.clamp(0.0, 1.0),
            }
        } else {
            Placement::OnLine
        }
    }
}

/// A crossing found during the walk, with its position along the cut.
#[derive(Debug, Clone, Copy)]
struct Hit {
    point: Point2<f32>,
    t: f32,
}

/// Merges consecutive points closer than `tolerance`, treating the list as a closed ring.
fn dedup_ring(mut points: Vec<Point2<f32>>, tolerance: f32) -> Vec<Point2<f32>> {
    points.dedup_by(|b, a| (*b - *a).norm() <= tolerance);
    while points.len() > 1 && (points[0] - points[points.len() - 1]).norm() <= tolerance {
        points.pop();
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_relative_eq, relative_eq};

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    fn square() -> Polygon {
        Polygon::from(Rectangle::new(p(0.0, 0.0), 10.0, 10.0).unwrap())
    }

    fn cut(a: [f32; 2], b: [f32; 2]) -> Segment {
        Segment::new(p(a[0], a[1]), p(b[0], b[1]))
    }

    /// Checks that `polygon` holds exactly `expected`, in any order.
    fn assert_same_points(polygon: &Polygon, expected: &[Point2<f32>]) {
        assert_eq!(polygon.len(), expected.len(), "{polygon:?} vs {expected:?}");
        for e in expected {
            assert!(
                polygon.vertices().iter().any(|v| relative_eq!(*v, *e, epsilon = 1e-4)),
                "{e:?} missing from {polygon:?}"
            );
        }
    }

    #[test]
    fn horizontal_cut_through_square() {
        let (first, second) = split(&square(), &cut([-5.0, 5.0], [15.0, 5.0]))
            .into_polygons()
            .unwrap();

        assert_eq!(
            first.vertices(),
            &[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 5.0), p(0.0, 5.0)]
        );
        assert_eq!(
            second.vertices(),
            &[p(10.0, 5.0), p(10.0, 10.0), p(0.0, 10.0), p(0.0, 5.0)]
        );
    }

    #[test]
    fn cut_outside_square_does_not_split() {
        assert_eq!(
            split(&square(), &cut([-5.0, -5.0], [-1.0, -1.0])),
            SplitResult::NoSplit
        );
    }

    #[test]
    fn diagonal_cut_through_corners_gives_triangles() {
        let (first, second) = split(&square(), &cut([0.0, 0.0], [10.0, 10.0]))
            .into_polygons()
            .unwrap();

        assert_same_points(&first, &[p(0.0, 0.0), p(10.0, 10.0), p(0.0, 10.0)]);
        assert_same_points(&second, &[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)]);
    }

    #[test]
    fn diagonal_cut_exact_tolerance_gives_triangles() {
        let result = split_with_epsilon(&square(), &cut([0.0, 0.0], [10.0, 10.0]), 0.0);
        let (first, second) = result.into_polygons().unwrap();

        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn cut_through_one_corner_and_one_edge() {
        let (first, second) = split(&square(), &cut([12.0, 11.0], [-4.0, 3.0]))
            .into_polygons()
            .unwrap();

        assert_same_points(&first, &[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 5.0)]);
        assert_same_points(&second, &[p(10.0, 10.0), p(0.0, 10.0), p(0.0, 5.0)]);
    }

    #[test]
    fn cut_ending_inside_does_not_split() {
        // Enters through the left edge and stops in the middle.
        assert_eq!(
            split(&square(), &cut([-5.0, 5.0], [5.0, 5.0])),
            SplitResult::NoSplit
        );
    }

    #[test]
    fn cut_entirely_inside_does_not_split() {
        assert!(!split(&square(), &cut([2.0, 2.0], [8.0, 8.0])).is_split());
    }

    #[test]
    fn cut_touching_a_corner_does_not_split() {
        assert_eq!(
            split(&square(), &cut([5.0, 15.0], [15.0, 5.0])),
            SplitResult::NoSplit
        );
    }

    #[test]
    fn cut_along_an_edge_does_not_split() {
        assert_eq!(
            split(&square(), &cut([-5.0, 0.0], [15.0, 0.0])),
            SplitResult::NoSplit
        );
    }

    #[test]
    fn cut_with_more_than_two_crossings_does_not_split() {
        // U shape opening upwards; a horizontal cut through both arms crosses four edges.
        let u = Polygon::new(vec![
            p(0.0, 0.0),
            p(9.0, 0.0),
            p(9.0, 9.0),
            p(6.0, 9.0),
            p(6.0, 3.0),
            p(3.0, 3.0),
            p(3.0, 9.0),
            p(0.0, 9.0),
        ])
        .unwrap();

        assert_eq!(
            split(&u, &cut([-1.0, 6.0], [10.0, 6.0])),
            SplitResult::NoSplit
        );
        // Below the notch the same shape splits cleanly.
        assert!(split(&u, &cut([-1.0, 1.0], [10.0, 1.0])).is_split());
    }

    #[test]
    fn cut_direction_does_not_change_pieces() {
        let forward = cut([-5.0, 5.0], [15.0, 5.0]);
        let (a1, a2) = split(&square(), &forward).into_polygons().unwrap();
        let (b1, b2) = split(&square(), &forward.reversed()).into_polygons().unwrap();

        assert_eq!(a1, b1);
        assert_eq!(a2, b2);
    }

    #[test]
    fn pieces_cover_the_original_area() {
        let poly = Polygon::new(vec![
            p(100.0, 100.0),
            p(200.0, 50.0),
            p(300.0, 50.0),
            p(400.0, 200.0),
            p(350.0, 250.0),
            p(200.0, 300.0),
            p(150.0, 300.0),
        ])
        .unwrap();

        let (first, second) = split(&poly, &cut([50.0, 20.0], [420.0, 320.0]))
            .into_polygons()
            .unwrap();

        assert_relative_eq!(
            first.area() + second.area(),
            poly.area(),
            max_relative = 1e-4
        );
        assert_eq!(first.len() + second.len() - 4, poly.len());
    }

    #[test]
    fn shapes_are_cuttable() {
        let rect = Rectangle::new(p(0.0, 0.0), 10.0, 10.0).unwrap();
        assert!(rect.cut(&cut([5.0, -1.0], [5.0, 11.0])).is_split());

        let tri = Triangle::new(p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0)).unwrap();
        assert!(tri.cut(&cut([2.0, -1.0], [2.0, 11.0])).is_split());
        assert!(!tri.cut(&cut([20.0, -1.0], [20.0, 11.0])).is_split());
    }

    /// Regular hexagon away from the origin, with non-integer coordinates.
    fn hexagon() -> Polygon {
        let (cx, cy, r) = (31.3f32, -111.6f32, 37.7f32);
        let vertices = (0..6)
            .map(|k| {
                let angle = k as f32 * std::f32::consts::FRAC_PI_3;
                p(cx + r * angle.cos(), cy + r * angle.sin())
            })
            .collect();
        Polygon::new(vertices).unwrap()
    }

    /// Segment through `a` and `b`, extended by `margin` past both.
    fn chord(a: Point2<f32>, b: Point2<f32>, margin: f32) -> Segment {
        let dir = (b - a).normalize() * margin;
        Segment::new(a - dir, b + dir)
    }

    #[test]
    fn chord_through_opposite_vertices_splits_off_origin() {
        let hex = hexagon();
        let v = hex.vertices();

        for (i, j) in [(0, 3), (1, 4), (2, 5)] {
            let (first, second) = split(&hex, &chord(v[i], v[j], 0.5))
                .into_polygons()
                .unwrap_or_else(|| panic!("chord {i}-{j} did not split"));
            assert_eq!((first.len(), second.len()), (4, 4), "chord {i}-{j}");
            assert!(first.vertices().contains(&v[i]) && first.vertices().contains(&v[j]));
            assert!(second.vertices().contains(&v[i]) && second.vertices().contains(&v[j]));
        }
    }

    #[test]
    fn chord_through_two_vertices_preserves_area() {
        let hex = hexagon();
        let v = hex.vertices();

        let (first, second) = split(&hex, &chord(v[1], v[3], 0.5)).into_polygons().unwrap();
        assert_eq!((first.len(), second.len()), (5, 3));
        assert_relative_eq!(first.area() + second.area(), hex.area(), max_relative = 1e-4);
    }

    #[test]
    fn chord_through_one_vertex_off_origin() {
        let hex = hexagon();
        let v = hex.vertices();
        // From vertex 1 to the middle of the opposite edge 3-4.
        let mid = nalgebra::center(&v[3], &v[4]);

        let (first, second) = split(&hex, &chord(v[1], mid, 0.5)).into_polygons().unwrap();
        assert_eq!(first.len() + second.len(), 6 + 3);
    }

    #[test]
    fn cut_grazing_corners_snaps_onto_them() {
        // Misses both corners of the diagonal by a few ulps.
        let result = split(&square(), &cut([-1.0, -1.0], [11.0, 11.00001]));
        let (first, second) = result.into_polygons().unwrap();

        assert_eq!((first.len(), second.len()), (3, 3));
        for piece in [&first, &second] {
            assert!(piece.vertices().contains(&p(0.0, 0.0)));
            assert!(piece.vertices().contains(&p(10.0, 10.0)));
        }
    }

    #[test]
    fn vertex_placement_against_cut() {
        let c = cut([0.0, 0.0], [10.0, 0.0]);

        assert_eq!(Placement::of(&p(5.0, 1.0), &c, 1e-3, 1e-5), Placement::Left);
        assert_eq!(Placement::of(&p(5.0, -1.0), &c, 1e-3, 1e-5), Placement::Right);
        assert_eq!(Placement::of(&p(15.0, 0.0), &c, 1e-3, 1e-5), Placement::OnLine);
        assert_eq!(
            Placement::of(&p(2.5, 1e-4), &c, 1e-3, 1e-5),
            Placement::OnCut { t: 0.25 }
        );
        assert_eq!(
            Placement::of(&p(10.0, 0.0), &c, 1e-3, 1e-5),
            Placement::OnCut { t: 1.0 }
        );
    }

    #[test]
    fn zero_length_cut_does_not_split() {
        assert_eq!(
            split(&square(), &cut([5.0, 5.0], [5.0, 5.0])),
            SplitResult::NoSplit
        );
    }

    #[test]
    fn dedup_ring_merges_wraparound() {
        let ring = vec![p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)];
        assert_eq!(dedup_ring(ring, 0.0), vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);

        let ring = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1e-4), p(1.0, 1.0), p(1e-4, 0.0)];
        assert_eq!(dedup_ring(ring, 1e-3), vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0)]);
    }
}
