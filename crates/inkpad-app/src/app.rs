//! Application state and the canvas view.

use crate::config::AppConfig;
use crate::shortcuts;
use crate::ui;
use inkpad_core::canvas::Canvas;
use inkpad_core::input::{MouseButton, PointerEvent};
use inkpad_render::{RenderContext, render_scene};
use inkpad_widgets::theme;
use kurbo::Point;

/// Top-level application state.
pub struct InkpadApp {
    /// The canvas being drawn on.
    pub canvas: Canvas,
    /// Startup configuration.
    pub config: AppConfig,
    /// Text buffer for the custom sticker entry.
    pub custom_sticker: String,
    /// Document revision at the last painted frame.
    last_revision: u64,
}

impl InkpadApp {
    /// Create the application from its configuration.
    pub fn new(config: AppConfig) -> Self {
        let mut canvas = Canvas::new();
        canvas.tools.set_marker_width(config.default_marker_width);
        canvas.tools.set_sticker_size(config.sticker_size);
        canvas.tools.set_palette(&config.sticker_palette);

        Self {
            canvas,
            config,
            custom_sticker: String::new(),
            last_revision: 0,
        }
    }

    /// Translate egui pointer state over the canvas rect into core
    /// pointer events.
    fn handle_canvas_input(&mut self, response: &egui::Response, origin: egui::Pos2) {
        let (pressed, released, latest_pos) = response.ctx.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
            )
        });

        let inside = latest_pos.is_some_and(|pos| response.rect.contains(pos));
        if inside {
            let pos = latest_pos.unwrap_or_default();
            let position = Point::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64);

            self.canvas
                .handle_pointer_event(PointerEvent::Move { position });
            if pressed {
                self.canvas.handle_pointer_event(PointerEvent::Down {
                    position,
                    button: MouseButton::Left,
                });
            }
            if released {
                self.canvas.handle_pointer_event(PointerEvent::Up {
                    position,
                    button: MouseButton::Left,
                });
            }
        } else if self.canvas.input.pointer_inside() {
            self.canvas.handle_pointer_event(PointerEvent::Leave);
        }
    }

    /// The drawing area: fixed-size canvas, pointer handling, redraw.
    fn canvas_view(&mut self, ui: &mut egui::Ui) {
        let desired = egui::vec2(
            self.config.canvas_size.0 as f32,
            self.config.canvas_size.1 as f32,
        );

        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click_and_drag());
            let painter = ui.painter_at(rect);

            self.handle_canvas_input(&response, rect.min);

            let ctx = RenderContext::new(&self.canvas, rect)
                .with_background(self.config.background);
            render_scene(&painter, &ctx);

            painter.rect_stroke(
                rect,
                egui::CornerRadius::ZERO,
                egui::Stroke::new(1.0, theme::BORDER),
                egui::StrokeKind::Outside,
            );
        });
    }
}

impl eframe::App for InkpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        shortcuts::handle(ctx, &mut self.canvas);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| ui::toolbar(ui, self));
        egui::CentralPanel::default().show(ctx, |ui| self.canvas_view(ui));

        let revision = self.canvas.document.revision();
        if revision != self.last_revision {
            self.last_revision = revision;
            ctx.request_repaint();
        }
    }
}
