//! Renderer for the Inkpad drawing pad.
//!
//! Implements the core `DrawSurface` abstraction on top of
//! `egui::Painter` and assembles the full scene (background, committed
//! commands, live preview) each frame.

mod egui_surface;
mod renderer;

pub use egui_surface::{EguiSurface, to_color32};
pub use renderer::{RenderContext, paint_canvas, render_scene};
