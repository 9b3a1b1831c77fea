//! Freehand marker stroke command.

use super::{CommandTrait, MarkerStyle};
use crate::surface::DrawSurface;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand marker stroke (ordered series of points).
///
/// Width and color are captured at creation time; the point list grows
/// while the pointer drags and is frozen once it is released.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Points in the stroke, in capture order.
    pub points: Vec<Point>,
    /// Marker properties at creation time.
    pub style: MarkerStyle,
}

impl Stroke {
    /// Create a new empty stroke.
    pub fn new(style: MarkerStyle) -> Self {
        Self {
            points: Vec::new(),
            style,
        }
    }

    /// Create a stroke starting at a point.
    pub fn from_point(start: Point, style: MarkerStyle) -> Self {
        Self {
            points: vec![start],
            style,
        }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>, style: MarkerStyle) -> Self {
        Self { points, style }
    }

    /// Get the number of recorded points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the stroke has no recorded points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl CommandTrait for Stroke {
    fn drag(&mut self, to: Point) {
        self.points.push(to);
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        match self.points.as_slice() {
            // Nothing recorded yet
            [] => {}
            // A click without movement leaves a round dot
            [p] => surface.fill_circle(*p, self.style.width / 2.0, self.style.color),
            points => surface.stroke_polyline(points, self.style.width, self.style.color),
        }
    }

    fn bounds(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        let half = self.style.width / 2.0;
        Rect::new(min_x, min_y, max_x, max_y).inflate(half, half)
    }
}
