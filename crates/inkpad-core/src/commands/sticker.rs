//! Emoji sticker command.

use super::CommandTrait;
use crate::surface::DrawSurface;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// An emoji sticker stamped onto the canvas.
///
/// The glyph and size are fixed at creation time; the position follows
/// the pointer while it drags and is frozen once it is released.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    /// Center position in canvas coordinates.
    pub position: Point,
    /// The emoji (or any text) glyph to stamp.
    pub glyph: String,
    /// Glyph size in canvas pixels.
    pub size: f64,
}

impl Sticker {
    /// Create a new sticker.
    pub fn new(position: Point, glyph: impl Into<String>, size: f64) -> Self {
        Self {
            position,
            glyph: glyph.into(),
            size,
        }
    }
}

impl CommandTrait for Sticker {
    fn drag(&mut self, to: Point) {
        self.position = to;
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        surface.draw_glyph(&self.glyph, self.position, self.size);
    }

    fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, Size::new(self.size, self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Primitive, RecordingSurface};

    #[test]
    fn test_drag_repositions() {
        let mut sticker = Sticker::new(Point::new(10.0, 10.0), "🎉", 32.0);
        sticker.drag(Point::new(50.0, 40.0));
        assert_eq!(sticker.position, Point::new(50.0, 40.0));
    }

    #[test]
    fn test_render_emits_glyph() {
        let sticker = Sticker::new(Point::new(20.0, 30.0), "⭐", 24.0);
        let mut surface = RecordingSurface::new();
        sticker.render(&mut surface);

        assert_eq!(
            surface.primitives,
            vec![Primitive::Glyph {
                glyph: "⭐".to_string(),
                center: Point::new(20.0, 30.0),
                size: 24.0,
            }]
        );
    }

    #[test]
    fn test_bounds_centered_on_position() {
        let sticker = Sticker::new(Point::new(100.0, 100.0), "😀", 32.0);
        let bounds = sticker.bounds();
        assert_eq!(bounds.center(), Point::new(100.0, 100.0));
        assert!((bounds.width() - 32.0).abs() < f64::EPSILON);
    }
}
