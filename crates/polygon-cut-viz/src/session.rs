//! Interactive cut session: pointer input in, split polygons out.

use macroquad::prelude::*;
use polygon_cut::{
    split_with_epsilon, Point, Polygon, Segment, SplitResult, INTERSECTION_EPSILON,
};

use crate::{
    draw_path, draw_polygon_outline, draw_segment, CUT_COLOR, PIECE_COLORS, SOURCE_COLOR,
};

const LINE_THICKNESS: f32 = 2.0;

/// Where the session is in the press/drag/release cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Showing the source polygon, waiting for a press.
    Idle,
    /// A cut is being drawn.
    Dragging {
        start: Point,
        current: Point,
        /// Every pointer position seen since the press, starting with `start`.
        trail: Vec<Point>,
    },
    /// The polygon has been split. Further presses are ignored until reset.
    Split { first: Polygon, second: Polygon },
}

/// State machine driving one polygon through an interactive cut.
///
/// Transitions:
/// - `Idle` --press--> `Dragging`
/// - `Dragging` --drag--> `Dragging`
/// - `Dragging` --release--> `Split` if the cut divides the polygon, else `Idle`
/// - any --reset--> `Idle`
#[derive(Debug, Clone)]
pub struct CutSession {
    polygon: Polygon,
    epsilon: f32,
    state: SessionState,
}

impl CutSession {
    /// Creates an idle session for `polygon`.
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            epsilon: INTERSECTION_EPSILON,
            state: SessionState::Idle,
        }
    }

    /// Sets the tolerance passed to the splitter.
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns the polygon being cut.
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the cut from the press position to the current pointer, while dragging.
    pub fn cut_segment(&self) -> Option<Segment> {
        match &self.state {
            SessionState::Dragging { start, current, .. } => Some(Segment::new(*start, *current)),
            _ => None,
        }
    }

    /// Starts a cut at `at`. Returns true if the state changed.
    pub fn press(&mut self, at: Point) -> bool {
        if self.state != SessionState::Idle {
            return false;
        }
        tracing::info!(x = at.x, y = at.y, "cut started");
        self.state = SessionState::Dragging {
            start: at,
            current: at,
            trail: vec![at],
        };
        true
    }

    /// Moves the end of the cut to `to`. Returns true if the state changed.
    pub fn drag(&mut self, to: Point) -> bool {
        match &mut self.state {
            SessionState::Dragging { current, trail, .. } => {
                if *current == to {
                    return false;
                }
                *current = to;
                trail.push(to);
                true
            }
            SessionState::Idle | SessionState::Split { .. } => false,
        }
    }

    /// Finishes the cut at `at` and splits the polygon.
    ///
    /// Returns the split outcome, or `None` if no cut was in progress.
    pub fn release(&mut self, at: Point) -> Option<SplitResult> {
        let SessionState::Dragging { start, .. } = self.state else {
            return None;
        };

        let cut = Segment::new(start, at);
        let result = split_with_epsilon(&self.polygon, &cut, self.epsilon);

        self.state = match &result {
            SplitResult::Split(first, second) => {
                tracing::info!(
                    first = first.len(),
                    second = second.len(),
                    "polygon split"
                );
                SessionState::Split {
                    first: first.clone(),
                    second: second.clone(),
                }
            }
            SplitResult::NoSplit => {
                tracing::info!(
                    from = ?(start.x, start.y),
                    to = ?(at.x, at.y),
                    "cut does not split the polygon"
                );
                SessionState::Idle
            }
        };

        Some(result)
    }

    /// Drops any cut or split and shows the source polygon again.
    pub fn reset(&mut self) {
        if self.state != SessionState::Idle {
            tracing::info!("session reset");
        }
        self.state = SessionState::Idle;
    }

    /// Feeds macroquad pointer and keyboard input into the state machine.
    ///
    /// Left button press/move/release drive the cut; `R` resets.
    /// Returns true if the state changed.
    pub fn update(&mut self) -> bool {
        let (x, y) = mouse_position();
        let pointer = Point::new(x, y);
        let mut changed = false;

        if is_key_pressed(KeyCode::R) {
            changed = self.state != SessionState::Idle;
            self.reset();
        }
        if is_mouse_button_pressed(MouseButton::Left) {
            changed |= self.press(pointer);
        }
        if is_mouse_button_down(MouseButton::Left) {
            changed |= self.drag(pointer);
        }
        if is_mouse_button_released(MouseButton::Left) {
            changed |= self.release(pointer).is_some();
        }

        changed
    }

    /// Renders the current state.
    pub fn draw(&self) {
        match &self.state {
            SessionState::Idle => {
                draw_polygon_outline(&self.polygon, LINE_THICKNESS, SOURCE_COLOR);
            }
            SessionState::Dragging { start, current, trail } => {
                draw_polygon_outline(&self.polygon, LINE_THICKNESS, SOURCE_COLOR);
                draw_path(trail, LINE_THICKNESS, CUT_COLOR);
                draw_segment(&Segment::new(*start, *current), 1.0, LIGHTGRAY);
            }
            SessionState::Split { first, second } => {
                draw_polygon_outline(first, LINE_THICKNESS, PIECE_COLORS[0]);
                draw_polygon_outline(second, LINE_THICKNESS, PIECE_COLORS[1]);
            }
        }
    }

    /// Draws a one-line status text at `(x, y)`.
    pub fn draw_status(&self, x: f32, y: f32) {
        let text = match &self.state {
            SessionState::Idle => "Drag across the polygon to cut it".to_string(),
            SessionState::Dragging { start, current, .. } => format!(
                "Cutting from ({:.0}, {:.0}) to ({:.0}, {:.0})",
                start.x, start.y, current.x, current.y
            ),
            SessionState::Split { first, second } => format!(
                "Split into {} + {} vertices. Press R to reset",
                first.len(),
                second.len()
            ),
        };
        draw_text(&text, x, y, 20.0, DARKGRAY);
    }
}
