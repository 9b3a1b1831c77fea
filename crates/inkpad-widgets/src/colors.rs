//! Color swatch widget.

use egui::{Color32, CursorIcon, Sense, Stroke, Ui, vec2};

use crate::{sizing, theme};

/// A clickable circular color swatch.
pub struct ColorSwatch<'a> {
    color: Color32,
    tooltip: &'a str,
    selected: bool,
}

impl<'a> ColorSwatch<'a> {
    /// Create a new color swatch.
    pub fn new(color: Color32, tooltip: &'a str) -> Self {
        Self {
            color,
            tooltip,
            selected: false,
        }
    }

    /// Set whether this swatch is selected.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show the swatch and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let (rect, response) =
            ui.allocate_exact_size(vec2(sizing::SMALL, sizing::SMALL), Sense::click());

        if ui.is_rect_visible(rect) {
            let center = rect.center();
            let radius = rect.width() / 2.0;

            ui.painter().circle_filled(center, radius, self.color);
            ui.painter()
                .circle_stroke(center, radius, Stroke::new(1.0, theme::BORDER));

            if self.selected {
                // Inner offset ring
                ui.painter()
                    .circle_stroke(center, radius - 3.0, Stroke::new(2.0, Color32::WHITE));
                ui.painter()
                    .circle_stroke(center, radius + 1.0, Stroke::new(1.5, theme::ACCENT));
            }
        }

        let clicked = response.clicked();
        response
            .on_hover_text(self.tooltip)
            .on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}
