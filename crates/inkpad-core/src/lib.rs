//! Inkpad Core Library
//!
//! Platform-agnostic data model for the Inkpad drawing pad: drawing
//! commands, the display list with undo/redo, tool state and the live
//! preview, and the pointer input layer.

pub mod canvas;
pub mod commands;
pub mod input;
pub mod surface;
pub mod tools;

pub use canvas::{Canvas, CanvasDocument};
pub use commands::{Color, Command, CommandTrait, MarkerStyle, Sticker, Stroke};
pub use input::{InputState, MouseButton, PointerEvent};
pub use surface::{DrawSurface, Primitive, RecordingSurface};
pub use tools::{ToolKind, ToolManager, ToolPreview};
