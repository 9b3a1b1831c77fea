//! `DrawSurface` implementation over `egui::Painter`.

use inkpad_core::commands::Color;
use inkpad_core::surface::DrawSurface;
use kurbo::Point;

/// Convert a core color to an egui color.
pub fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Paints core drawing primitives onto an egui painter.
///
/// Commands stay in canvas pixel space; the surface offsets them by the
/// canvas origin on screen.
pub struct EguiSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
}

impl<'a> EguiSurface<'a> {
    /// Create a surface painting into the canvas rectangle starting at
    /// `origin`.
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, point: Point) -> egui::Pos2 {
        egui::pos2(
            self.origin.x + point.x as f32,
            self.origin.y + point.y as f32,
        )
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Color) {
        if points.len() < 2 {
            return;
        }
        let color = to_color32(color);
        let screen: Vec<egui::Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();

        // Round caps: egui lines end flat
        let radius = (width / 2.0) as f32;
        self.painter.circle_filled(screen[0], radius, color);
        self.painter
            .circle_filled(screen[screen.len() - 1], radius, color);

        self.painter
            .add(egui::Shape::line(screen, egui::Stroke::new(width as f32, color)));
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.painter
            .circle_filled(self.to_screen(center), radius as f32, to_color32(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        self.painter.circle_stroke(
            self.to_screen(center),
            radius as f32,
            egui::Stroke::new(width as f32, to_color32(color)),
        );
    }

    fn draw_glyph(&mut self, glyph: &str, center: Point, size: f64) {
        self.painter.text(
            self.to_screen(center),
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::proportional(size as f32),
            egui::Color32::BLACK,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_conversion() {
        let color = Color::new(10, 20, 30, 200);
        assert_eq!(
            to_color32(color),
            egui::Color32::from_rgba_unmultiplied(10, 20, 30, 200)
        );
    }

    #[test]
    fn test_opaque_roundtrip() {
        let color = to_color32(Color::opaque(255, 0, 0));
        assert_eq!(color, egui::Color32::RED);
    }
}
