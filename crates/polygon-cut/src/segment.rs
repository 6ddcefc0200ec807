//! Line segments and segment/segment intersection.

use nalgebra::{Point2, Vector2};

/// Default tolerance for intersection tests.
///
/// Used both as the sine threshold below which two directions count as
/// parallel and as the slack allowed on the `[0, 1]` segment parameters.
pub const INTERSECTION_EPSILON: f32 = 1e-5;

/// Result of intersecting two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The segments do not meet: parallel, or the crossing lies outside one of them.
    None,
    /// Both segments lie on the same infinite line.
    ///
    /// No overlap interval is computed; callers treat this as no usable
    /// intersection.
    Collinear,
    /// The segments meet in a single point.
    Point(Point2<f32>),
}

impl Intersection {
    /// Returns the crossing point, if there is exactly one.
    #[inline]
    pub fn point(&self) -> Option<Point2<f32>> {
        match self {
            Intersection::Point(p) => Some(*p),
            Intersection::None | Intersection::Collinear => None,
        }
    }
}

/// A finite, directed line segment from `start` to `end`.
///
/// The direction only affects the parametrization `start + t * (end - start)`,
/// never which points the segment covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2<f32>,
    end: Point2<f32>,
}

impl Segment {
    /// Creates a segment between two points.
    pub fn new(start: Point2<f32>, end: Point2<f32>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> Point2<f32> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point2<f32> {
        self.end
    }

    /// Returns `end - start`.
    #[inline]
    pub fn direction(&self) -> Vector2<f32> {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().norm()
    }

    /// Returns the same segment traversed the other way.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Evaluates `start + t * (end - start)`.
    ///
    /// `t` is not clamped, so values outside `[0, 1]` land on the infinite line.
    #[inline]
    pub fn point_at(&self, t: f32) -> Point2<f32> {
        self.start + self.direction() * t
    }

    /// Returns the axis-aligned bounding rectangle as `(min, max)` corners.
    pub fn bounds(&self) -> (Point2<f32>, Point2<f32>) {
        (self.start.inf(&self.end), self.start.sup(&self.end))
    }
}

/// Intersects two segments using the default [`INTERSECTION_EPSILON`].
#[inline]
pub fn intersect(a: &Segment, b: &Segment) -> Intersection {
    intersect_with_epsilon(a, b, INTERSECTION_EPSILON)
}

/// Intersects two segments with a custom tolerance.
///
/// Both segments are parametrized, `a` as `A0 + t * (A1 - A0)` and `b` as
/// `B0 + u * (B1 - B0)`, and the crossing is reported when both `t` and `u`
/// fall in the closed interval `[0, 1]`. Touching an endpoint counts.
///
/// An `epsilon` of `0.0` gives exact comparisons. With a positive `epsilon`:
/// - directions whose angle has a sine below `epsilon` count as parallel,
/// - `t` and `u` may overshoot `[0, 1]` by up to `epsilon`; the reported
///   point is evaluated with `t` clamped so it always lies on `a`.
///
/// Degenerate zero-length segments are always reported as
/// [`Intersection::Collinear`].
pub fn intersect_with_epsilon(a: &Segment, b: &Segment, epsilon: f32) -> Intersection {
    match solve(a, b, epsilon) {
        Ok(crossing) => Intersection::Point(crossing.point),
        Err(miss) => miss,
    }
}

/// A single crossing point together with its parameters on both segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub point: Point2<f32>,
    /// Position along the first segment, clamped to `[0, 1]`.
    pub t: f32,
    /// Position along the second segment, clamped to `[0, 1]`.
    pub u: f32,
}

/// Like [`intersect_with_epsilon`], but keeps the segment parameters of the crossing.
///
/// Returns `None` for both [`Intersection::None`] and [`Intersection::Collinear`].
#[inline]
pub fn crossing_with_epsilon(a: &Segment, b: &Segment, epsilon: f32) -> Option<Crossing> {
    solve(a, b, epsilon).ok()
}

fn solve(a: &Segment, b: &Segment, epsilon: f32) -> Result<Crossing, Intersection> {
    let da = a.direction();
    let db = b.direction();
    let offset = a.start - b.start;

    let denom = db.y * da.x - db.x * da.y;
    let num_t = db.x * offset.y - db.y * offset.x;
    let num_u = da.x * offset.y - da.y * offset.x;

    let len_a = da.norm();
    let len_b = db.norm();

    if len_a == 0.0 || len_b == 0.0 {
        return Err(Intersection::Collinear);
    }

    if denom.abs() <= epsilon * len_a * len_b {
        let scale = len_a.max(len_b).max(offset.norm());
        if num_t.abs() <= epsilon * len_b * scale && num_u.abs() <= epsilon * len_a * scale {
            return Err(Intersection::Collinear);
        }
        return Err(Intersection::None);
    }

    let t = num_t / denom;
    let u = num_u / denom;

    let within = |s: f32| s >= -epsilon && s <= 1.0 + epsilon;
    if !(within(t) && within(u)) {
        return Err(Intersection::None);
    }

    let t = t.clamp(0.0, 1.0);
    Ok(Crossing {
        point: a.point_at(t),
        t,
        u: u.clamp(0.0, 1.0),
    })
}
