//! Reusable egui widget components for the Inkpad toolbar.
//!
//! - **Buttons**: glyph tool buttons, marker width buttons
//! - **Colors**: clickable color swatches
//! - **Layout**: section labels and separators

pub mod buttons;
pub mod colors;
pub mod layout;

pub use buttons::{GlyphButton, WidthButton};
pub use colors::ColorSwatch;
pub use layout::{section_label, vertical_separator};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Small widget size (color swatches)
    pub const SMALL: f32 = 20.0;
    /// Medium widget size (toolbar buttons)
    pub const MEDIUM: f32 = 28.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(235, 235, 235);
}
