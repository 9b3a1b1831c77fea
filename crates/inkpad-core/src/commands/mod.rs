//! Drawing commands recorded into the display list.

mod sticker;
mod stroke;

pub use sticker::Sticker;
pub use stroke::Stroke;

use crate::surface::DrawSurface;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::opaque(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::opaque(255, 255, 255)
    }
}

/// Marker properties captured by a stroke at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Line width in canvas pixels.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            width: 2.0,
            color: Color::black(),
        }
    }
}

/// Common trait for all drawing commands.
pub trait CommandTrait {
    /// Extend the command with a new point (stroke) or position (sticker).
    fn drag(&mut self, to: Point);

    /// Render the command onto a drawing surface.
    fn render(&self, surface: &mut dyn DrawSurface);

    /// Get the bounding box in canvas coordinates.
    fn bounds(&self) -> Rect;
}

/// Enum wrapper for all command types (for storage and serialization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Command {
    pub fn drag(&mut self, to: Point) {
        match self {
            Command::Stroke(c) => c.drag(to),
            Command::Sticker(c) => c.drag(to),
        }
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        match self {
            Command::Stroke(c) => c.render(surface),
            Command::Sticker(c) => c.render(surface),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Command::Stroke(c) => c.bounds(),
            Command::Sticker(c) => c.bounds(),
        }
    }

    /// Check if this command is a stroke.
    pub fn is_stroke(&self) -> bool {
        matches!(self, Command::Stroke(_))
    }

    /// Check if this command is a sticker.
    pub fn is_sticker(&self) -> bool {
        matches!(self, Command::Sticker(_))
    }
}
