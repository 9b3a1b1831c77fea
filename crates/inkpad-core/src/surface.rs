//! Drawing surface abstraction that commands render through.

use crate::commands::Color;
use kurbo::Point;

/// Primitive drawing operations backing command and preview rendering.
///
/// The egui painter implements this in `inkpad-render`; tests use
/// [`RecordingSurface`].
pub trait DrawSurface {
    /// Stroke an open polyline with round caps and joins.
    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Color);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Stroke a circle outline.
    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color);

    /// Draw a text glyph centered on a point, sized in canvas pixels.
    fn draw_glyph(&mut self, glyph: &str, center: Point, size: f64);
}

/// A primitive emitted onto a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Polyline {
        points: Vec<Point>,
        width: f64,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    },
    Glyph {
        glyph: String,
        center: Point,
        size: f64,
    },
}

/// Surface that records primitives instead of drawing them.
///
/// Used by tests and headless inspection of what a frame would paint.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Primitives in emission order.
    pub primitives: Vec<Primitive>,
}

impl RecordingSurface {
    /// Create a new empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl DrawSurface for RecordingSurface {
    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Color) {
        self.primitives.push(Primitive::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.primitives.push(Primitive::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        self.primitives.push(Primitive::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn draw_glyph(&mut self, glyph: &str, center: Point, size: f64) {
        self.primitives.push(Primitive::Glyph {
            glyph: glyph.to_string(),
            center,
            size,
        });
    }
}
