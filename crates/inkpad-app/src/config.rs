//! Application configuration.

use inkpad_core::commands::Color;
use inkpad_core::tools::DEFAULT_STICKER_SIZE;
use serde::{Deserialize, Serialize};

/// Application settings applied at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Canvas size in pixels (width, height).
    pub canvas_size: (f64, f64),
    /// Canvas background color.
    pub background: Color,
    /// Marker width presets offered in the toolbar.
    pub width_presets: Vec<f64>,
    /// Marker width selected at startup.
    pub default_marker_width: f64,
    /// Marker colors offered in the toolbar.
    pub marker_palette: Vec<Color>,
    /// Built-in sticker glyphs.
    pub sticker_palette: Vec<String>,
    /// Sticker glyph size in canvas pixels.
    pub sticker_size: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_size: (256.0, 256.0),
            background: Color::white(),
            width_presets: vec![2.0, 4.0, 8.0, 14.0],
            default_marker_width: 2.0,
            marker_palette: vec![
                Color::black(),
                Color::opaque(220, 38, 38),
                Color::opaque(37, 99, 235),
                Color::opaque(22, 163, 74),
                Color::opaque(234, 88, 12),
            ],
            sticker_palette: ["😀", "⭐", "🎉", "❤️", "🌈"].map(String::from).into(),
            sticker_size: DEFAULT_STICKER_SIZE,
        }
    }
}
