//! Button components: glyph tool buttons and marker width buttons.

use egui::{
    Color32, CornerRadius, CursorIcon, FontId, Sense, Stroke, StrokeKind, Ui, vec2,
};

use crate::{sizing, theme};

/// A square button showing a text glyph (tool icon, emoji sticker).
pub struct GlyphButton<'a> {
    glyph: &'a str,
    tooltip: &'a str,
    selected: bool,
    size: f32,
}

impl<'a> GlyphButton<'a> {
    /// Create a new glyph button.
    pub fn new(glyph: &'a str, tooltip: &'a str) -> Self {
        Self {
            glyph,
            tooltip,
            selected: false,
            size: sizing::MEDIUM,
        }
    }

    /// Set whether the button is selected/active.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the button side length.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) = ui.allocate_exact_size(vec2(self.size, self.size), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::TRANSPARENT
            };

            ui.painter().rect_filled(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                bg_color,
            );

            let text_color = if self.selected {
                Color32::WHITE
            } else {
                theme::TEXT
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.glyph,
                FontId::proportional(self.size * 0.6),
                text_color,
            );
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A marker width preset button showing a dot of the actual width.
pub struct WidthButton<'a> {
    width: f32,
    tooltip: &'a str,
    selected: bool,
}

impl<'a> WidthButton<'a> {
    /// Create a new width button.
    pub fn new(width: f32, tooltip: &'a str, selected: bool) -> Self {
        Self {
            width,
            tooltip,
            selected,
        }
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let side = sizing::MEDIUM;
        let (rect, response) = ui.allocate_exact_size(vec2(side, side), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                theme::HOVER_BG
            } else {
                Color32::from_gray(250)
            };

            let dot_color = if self.selected {
                Color32::WHITE
            } else {
                Color32::from_gray(60)
            };

            ui.painter().rect_filled(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                bg_color,
            );
            if !self.selected {
                ui.painter().rect_stroke(
                    rect,
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.0, Color32::from_gray(200)),
                    StrokeKind::Inside,
                );
            }

            // Dot matching the marker width, capped to fit the button
            let radius = (self.width / 2.0).clamp(1.0, side / 2.0 - 4.0);
            ui.painter().circle_filled(rect.center(), radius, dot_color);
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
