//! Scene assembly: full clear-and-repaint of the committed display
//! list plus the live tool preview.

use crate::egui_surface::{EguiSurface, to_color32};
use inkpad_core::canvas::Canvas;
use inkpad_core::commands::Color;
use inkpad_core::surface::DrawSurface;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Screen-space rectangle the canvas occupies.
    pub viewport: egui::Rect,
    /// Background color.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a Canvas, viewport: egui::Rect) -> Self {
        Self {
            canvas,
            viewport,
            background_color: Color::white(),
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }
}

/// Paint the committed commands in draw order, then the live preview,
/// onto any surface.
pub fn paint_canvas(canvas: &Canvas, surface: &mut dyn DrawSurface) {
    for command in canvas.document.commands() {
        command.render(surface);
    }
    if let Some(preview) = canvas.preview() {
        preview.render(surface);
    }
}

/// Render one frame: clear the viewport, then repaint every committed
/// command and the preview.
pub fn render_scene(painter: &egui::Painter, ctx: &RenderContext) {
    painter.rect_filled(
        ctx.viewport,
        egui::CornerRadius::ZERO,
        to_color32(ctx.background_color),
    );

    let mut surface = EguiSurface::new(painter, ctx.viewport.min);
    paint_canvas(ctx.canvas, &mut surface);
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpad_core::input::PointerEvent;
    use inkpad_core::surface::{Primitive, RecordingSurface};
    use kurbo::Point;

    #[test]
    fn test_preview_painted_after_commands() {
        let mut canvas = Canvas::new();
        canvas.tools.select_sticker("⭐");

        // Commit one sticker, then hover elsewhere
        canvas.handle_pointer_event(PointerEvent::Down {
            position: Point::new(10.0, 10.0),
            button: inkpad_core::input::MouseButton::Left,
        });
        canvas.handle_pointer_event(PointerEvent::Up {
            position: Point::new(10.0, 10.0),
            button: inkpad_core::input::MouseButton::Left,
        });
        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(50.0, 50.0),
        });

        let mut surface = RecordingSurface::new();
        paint_canvas(&canvas, &mut surface);

        assert_eq!(surface.len(), 2);
        match (&surface.primitives[0], &surface.primitives[1]) {
            (
                Primitive::Glyph { center: committed, .. },
                Primitive::Glyph { center: ghost, .. },
            ) => {
                assert_eq!(*committed, Point::new(10.0, 10.0));
                assert_eq!(*ghost, Point::new(50.0, 50.0));
            }
            other => panic!("expected two glyphs, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_canvas_paints_nothing() {
        let canvas = Canvas::new();
        let mut surface = RecordingSurface::new();
        paint_canvas(&canvas, &mut surface);
        assert!(surface.is_empty());
    }

    #[test]
    fn test_marker_preview_is_circle_outline() {
        let mut canvas = Canvas::new();
        canvas.tools.set_marker_width(10.0);
        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(30.0, 30.0),
        });

        let mut surface = RecordingSurface::new();
        paint_canvas(&canvas, &mut surface);

        assert_eq!(surface.len(), 1);
        match &surface.primitives[0] {
            Primitive::StrokeCircle { center, radius, .. } => {
                assert_eq!(*center, Point::new(30.0, 30.0));
                assert!((radius - 5.0).abs() < f64::EPSILON);
            }
            other => panic!("expected a circle outline, got {other:?}"),
        }
    }
}
