//! Tool system: the current tool, the in-flight interaction, and the
//! live preview.

use crate::commands::{Color, Command, MarkerStyle, Sticker, Stroke};
use crate::surface::DrawSurface;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Default sticker glyph size in canvas pixels.
pub const DEFAULT_STICKER_SIZE: f64 = 32.0;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ToolKind {
    #[default]
    Marker,
    Sticker,
}

/// State of a tool interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ToolState {
    /// Tool is idle, waiting for a pointer press.
    #[default]
    Idle,
    /// A drag is in flight; the last committed command is still live.
    Active,
}

/// Manages the current tool and its interaction state.
#[derive(Debug, Clone)]
pub struct ToolManager {
    /// Currently selected tool.
    current_tool: ToolKind,
    /// Current state of the tool.
    state: ToolState,
    /// Style applied to new strokes.
    marker_style: MarkerStyle,
    /// Glyph stamped by the sticker tool.
    sticker_glyph: String,
    /// Sticker glyph size.
    sticker_size: f64,
    /// Sticker glyphs offered in the toolbar (built-ins plus custom).
    palette: Vec<String>,
}

impl Default for ToolManager {
    fn default() -> Self {
        let palette: Vec<String> = ["😀", "⭐", "🎉"].map(String::from).into();
        Self {
            current_tool: ToolKind::default(),
            state: ToolState::default(),
            marker_style: MarkerStyle::default(),
            sticker_glyph: palette[0].clone(),
            sticker_size: DEFAULT_STICKER_SIZE,
            palette,
        }
    }
}

impl ToolManager {
    /// Create a new tool manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current tool.
    pub fn current_tool(&self) -> ToolKind {
        self.current_tool
    }

    /// Set the current tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.current_tool = tool;
        self.state = ToolState::Idle;
    }

    /// Get the current marker width.
    pub fn marker_width(&self) -> f64 {
        self.marker_style.width
    }

    /// Set the marker width in canvas pixels.
    pub fn set_marker_width(&mut self, width: f64) {
        self.marker_style.width = width.max(0.5);
    }

    /// Get the current marker color.
    pub fn marker_color(&self) -> Color {
        self.marker_style.color
    }

    /// Set the marker color.
    pub fn set_marker_color(&mut self, color: Color) {
        self.marker_style.color = color;
    }

    /// Get the active sticker glyph.
    pub fn sticker_glyph(&self) -> &str {
        &self.sticker_glyph
    }

    /// Get the sticker glyph size.
    pub fn sticker_size(&self) -> f64 {
        self.sticker_size
    }

    /// Set the sticker glyph size.
    pub fn set_sticker_size(&mut self, size: f64) {
        self.sticker_size = size.max(1.0);
    }

    /// Get the sticker palette.
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Replace the sticker palette, keeping the active glyph valid.
    pub fn set_palette(&mut self, glyphs: &[String]) {
        if glyphs.is_empty() {
            return;
        }
        self.palette = glyphs.to_vec();
        if !self.palette.contains(&self.sticker_glyph) {
            self.sticker_glyph = self.palette[0].clone();
        }
    }

    /// Make a palette glyph the active sticker and switch to the
    /// sticker tool.
    pub fn select_sticker(&mut self, glyph: &str) {
        self.sticker_glyph = glyph.to_string();
        self.set_tool(ToolKind::Sticker);
    }

    /// Add a user-provided glyph to the palette and select it.
    /// Returns false if the trimmed glyph is empty.
    pub fn add_custom_sticker(&mut self, glyph: &str) -> bool {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return false;
        }
        if !self.palette.iter().any(|g| g == glyph) {
            self.palette.push(glyph.to_string());
        }
        self.select_sticker(glyph);
        true
    }

    /// Begin an interaction: create the command for the current tool.
    pub fn begin(&mut self, at: Point) -> Command {
        self.state = ToolState::Active;
        match self.current_tool {
            ToolKind::Marker => Command::Stroke(Stroke::from_point(at, self.marker_style)),
            ToolKind::Sticker => Command::Sticker(Sticker::new(
                at,
                self.sticker_glyph.clone(),
                self.sticker_size,
            )),
        }
    }

    /// End the current interaction, freezing the live command.
    pub fn finish(&mut self) {
        self.state = ToolState::Idle;
    }

    /// Check if a drag is in flight.
    pub fn is_active(&self) -> bool {
        self.state == ToolState::Active
    }

    /// Get the preview for the current tool at the cursor position.
    pub fn preview(&self, cursor: Point) -> ToolPreview {
        match self.current_tool {
            ToolKind::Marker => ToolPreview::MarkerCursor {
                center: cursor,
                width: self.marker_style.width,
                color: self.marker_style.color,
            },
            ToolKind::Sticker => ToolPreview::StickerGhost {
                center: cursor,
                glyph: self.sticker_glyph.clone(),
                size: self.sticker_size,
            },
        }
    }
}

/// Transient cursor-following visual for the pending tool.
///
/// Drawn after the committed commands; never part of the display list
/// and never undoable.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    /// Circle outline matching the marker width.
    MarkerCursor {
        center: Point,
        width: f64,
        color: Color,
    },
    /// Ghost of the sticker glyph.
    StickerGhost {
        center: Point,
        glyph: String,
        size: f64,
    },
}

impl ToolPreview {
    /// Render the preview onto a drawing surface.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        match self {
            ToolPreview::MarkerCursor {
                center,
                width,
                color,
            } => {
                surface.stroke_circle(*center, (width / 2.0).max(1.0), 1.0, *color);
            }
            ToolPreview::StickerGhost {
                center,
                glyph,
                size,
            } => {
                surface.draw_glyph(glyph, *center, *size);
            }
        }
    }
}
