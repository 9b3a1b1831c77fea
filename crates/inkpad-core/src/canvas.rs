//! Canvas document (display list + undo/redo) and runtime state.

use crate::commands::Command;
use crate::input::{InputState, MouseButton, PointerEvent};
use crate::tools::{ToolKind, ToolManager, ToolPreview};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The display list and its redo stack.
///
/// Committed commands live in exactly one of the two stacks at any
/// time. Insertion order in the display list is z-order is draw order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanvasDocument {
    /// Committed commands, back to front.
    commands: Vec<Command>,
    /// Commands popped off by undo, most recent last.
    #[serde(skip)]
    redo_stack: Vec<Command>,
    /// Bumped on every mutation; the app repaints when it moves.
    #[serde(skip)]
    revision: u64,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a new command: push it onto the display list and
    /// invalidate the redo history.
    pub fn commit(&mut self, command: Command) {
        log::debug!("commit: {command:?}");
        self.commands.push(command);
        self.redo_stack.clear();
        self.bump();
    }

    /// Extend the most recently committed command while a drag is in
    /// flight.
    pub fn drag_active(&mut self, to: Point) {
        if let Some(command) = self.commands.last_mut() {
            command.drag(to);
            self.bump();
        }
    }

    /// Undo the most recent command.
    /// Returns true if a command was moved to the redo stack.
    pub fn undo(&mut self) -> bool {
        match self.commands.pop() {
            Some(command) => {
                self.redo_stack.push(command);
                self.bump();
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone command.
    /// Returns true if a command was restored to the display list.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(command) => {
                self.commands.push(command);
                self.bump();
                true
            }
            None => false,
        }
    }

    /// Empty both the display list and the redo stack.
    pub fn clear(&mut self) {
        log::debug!("clear: dropping {} commands", self.commands.len());
        self.commands.clear();
        self.redo_stack.clear();
        self.bump();
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.commands.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the committed commands in draw order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Get the number of committed commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the number of commands waiting on the redo stack.
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Get the change counter; bumped on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Runtime canvas state: document, tools, pointer input.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    /// The document being drawn on.
    pub document: CanvasDocument,
    /// Tool manager.
    pub tools: ToolManager,
    /// Pointer input state.
    pub input: InputState,
}

impl Canvas {
    /// Create a new canvas with an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pointer event from the windowing layer.
    ///
    /// A left press commits a new live command for the current tool
    /// (clearing the redo stack), moves extend it, and a release or a
    /// pointer leave freezes it.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        self.input.handle_pointer_event(event);
        match event {
            PointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => {
                let command = self.tools.begin(position);
                self.document.commit(command);
            }
            PointerEvent::Move { position } => {
                if self.tools.is_active() {
                    self.document.drag_active(position);
                }
            }
            PointerEvent::Up {
                position,
                button: MouseButton::Left,
            } => {
                if self.tools.is_active() {
                    self.document.drag_active(position);
                    self.tools.finish();
                }
            }
            PointerEvent::Leave => self.finish_active(),
            _ => {}
        }
    }

    /// Freeze the in-flight command, if any.
    pub fn finish_active(&mut self) {
        if self.tools.is_active() {
            self.tools.finish();
        }
    }

    /// Set the current tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tools.set_tool(tool);
    }

    /// Undo the most recent command.
    pub fn undo(&mut self) -> bool {
        self.finish_active();
        self.document.undo()
    }

    /// Redo the most recently undone command.
    pub fn redo(&mut self) -> bool {
        self.finish_active();
        self.document.redo()
    }

    /// Clear the canvas, emptying both history stacks.
    pub fn clear(&mut self) {
        self.finish_active();
        self.document.clear();
    }

    /// Get the preview for the pending tool state.
    ///
    /// None while a drag is in flight (the live command is already on
    /// the display list) or while the pointer is off the canvas.
    pub fn preview(&self) -> Option<ToolPreview> {
        if self.tools.is_active() || !self.input.pointer_inside() {
            return None;
        }
        Some(self.tools.preview(self.input.pointer_position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{MarkerStyle, Sticker, Stroke};

    fn stroke_at(x: f64, y: f64) -> Command {
        Command::Stroke(Stroke::from_point(Point::new(x, y), MarkerStyle::default()))
    }

    fn sticker_at(x: f64, y: f64) -> Command {
        Command::Sticker(Sticker::new(Point::new(x, y), "⭐", 32.0))
    }

    #[test]
    fn test_commit_appends_in_draw_order() {
        let mut doc = CanvasDocument::new();
        doc.commit(stroke_at(0.0, 0.0));
        doc.commit(sticker_at(10.0, 10.0));

        assert_eq!(doc.len(), 2);
        assert!(doc.commands()[0].is_stroke());
        assert!(doc.commands()[1].is_sticker());
    }

    #[test]
    fn test_undo_then_redo_restores_display_list() {
        let mut doc = CanvasDocument::new();
        doc.commit(stroke_at(0.0, 0.0));
        doc.commit(sticker_at(10.0, 10.0));
        let before = doc.commands().to_vec();

        assert!(doc.undo());
        assert!(doc.undo());
        assert!(doc.is_empty());

        assert!(doc.redo());
        assert!(doc.redo());
        assert_eq!(doc.commands(), before.as_slice());
    }

    #[test]
    fn test_commit_clears_redo_stack() {
        let mut doc = CanvasDocument::new();
        doc.commit(stroke_at(0.0, 0.0));
        doc.commit(stroke_at(5.0, 5.0));

        assert!(doc.undo());
        assert!(doc.can_redo());

        doc.commit(sticker_at(20.0, 20.0));
        assert!(!doc.can_redo());
    }

    #[test]
    fn test_undo_redo_noop_when_empty() {
        let mut doc = CanvasDocument::new();
        assert!(!doc.undo());
        assert!(!doc.redo());
        assert!(!doc.can_undo());
        assert!(!doc.can_redo());
    }

    #[test]
    fn test_stacks_stay_disjoint() {
        let mut doc = CanvasDocument::new();
        doc.commit(stroke_at(0.0, 0.0));
        doc.commit(stroke_at(1.0, 1.0));
        doc.commit(stroke_at(2.0, 2.0));

        doc.undo();
        doc.undo();
        // Every command is owned by exactly one stack
        assert_eq!(doc.len() + doc.redo_len(), 3);

        doc.redo();
        assert_eq!(doc.len() + doc.redo_len(), 3);
    }

    #[test]
    fn test_clear_empties_both_stacks() {
        let mut doc = CanvasDocument::new();
        doc.commit(stroke_at(0.0, 0.0));
        doc.commit(stroke_at(1.0, 1.0));
        doc.undo();

        doc.clear();
        assert!(doc.is_empty());
        assert_eq!(doc.redo_len(), 0);
        assert!(!doc.can_undo());
        assert!(!doc.can_redo());
    }

    #[test]
    fn test_revision_bumps_on_every_mutation() {
        let mut doc = CanvasDocument::new();
        let r0 = doc.revision();

        doc.commit(stroke_at(0.0, 0.0));
        let r1 = doc.revision();
        assert_ne!(r0, r1);

        doc.drag_active(Point::new(5.0, 5.0));
        let r2 = doc.revision();
        assert_ne!(r1, r2);

        doc.undo();
        assert_ne!(r2, doc.revision());
    }

    #[test]
    fn test_pointer_drag_records_stroke() {
        let mut canvas = Canvas::new();

        canvas.handle_pointer_event(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
            button: MouseButton::Left,
        });
        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(10.0, 0.0),
        });
        canvas.handle_pointer_event(PointerEvent::Up {
            position: Point::new(20.0, 0.0),
            button: MouseButton::Left,
        });

        assert_eq!(canvas.document.len(), 1);
        match &canvas.document.commands()[0] {
            Command::Stroke(stroke) => assert_eq!(stroke.len(), 3),
            other => panic!("expected a stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_stroke_frozen_after_release() {
        let mut canvas = Canvas::new();

        canvas.handle_pointer_event(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
            button: MouseButton::Left,
        });
        canvas.handle_pointer_event(PointerEvent::Up {
            position: Point::new(5.0, 0.0),
            button: MouseButton::Left,
        });

        // Moves after release must not extend the committed stroke
        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(50.0, 50.0),
        });
        match &canvas.document.commands()[0] {
            Command::Stroke(stroke) => assert_eq!(stroke.len(), 2),
            other => panic!("expected a stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_sticker_drag_repositions_until_release() {
        let mut canvas = Canvas::new();
        canvas.tools.select_sticker("🎉");

        canvas.handle_pointer_event(PointerEvent::Down {
            position: Point::new(10.0, 10.0),
            button: MouseButton::Left,
        });
        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(40.0, 30.0),
        });
        canvas.handle_pointer_event(PointerEvent::Up {
            position: Point::new(42.0, 31.0),
            button: MouseButton::Left,
        });

        match &canvas.document.commands()[0] {
            Command::Sticker(sticker) => assert_eq!(sticker.position, Point::new(42.0, 31.0)),
            other => panic!("expected a sticker, got {other:?}"),
        }
    }

    #[test]
    fn test_right_button_does_not_draw() {
        let mut canvas = Canvas::new();
        canvas.handle_pointer_event(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
            button: MouseButton::Right,
        });
        assert!(canvas.document.is_empty());
    }

    #[test]
    fn test_preview_hidden_while_dragging() {
        let mut canvas = Canvas::new();

        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(10.0, 10.0),
        });
        assert!(canvas.preview().is_some());

        canvas.handle_pointer_event(PointerEvent::Down {
            position: Point::new(10.0, 10.0),
            button: MouseButton::Left,
        });
        assert!(canvas.preview().is_none());

        canvas.handle_pointer_event(PointerEvent::Up {
            position: Point::new(12.0, 12.0),
            button: MouseButton::Left,
        });
        assert!(canvas.preview().is_some());
    }

    #[test]
    fn test_preview_hidden_when_pointer_leaves() {
        let mut canvas = Canvas::new();

        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(10.0, 10.0),
        });
        assert!(canvas.preview().is_some());

        canvas.handle_pointer_event(PointerEvent::Leave);
        assert!(canvas.preview().is_none());
    }

    #[test]
    fn test_preview_tracks_tool_change() {
        let mut canvas = Canvas::new();
        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(10.0, 10.0),
        });

        assert!(matches!(
            canvas.preview(),
            Some(ToolPreview::MarkerCursor { .. })
        ));

        canvas.tools.select_sticker("⭐");
        assert!(matches!(
            canvas.preview(),
            Some(ToolPreview::StickerGhost { .. })
        ));

        canvas.set_tool(ToolKind::Marker);
        assert!(matches!(
            canvas.preview(),
            Some(ToolPreview::MarkerCursor { .. })
        ));
    }

    #[test]
    fn test_leave_freezes_live_command() {
        let mut canvas = Canvas::new();

        canvas.handle_pointer_event(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
            button: MouseButton::Left,
        });
        canvas.handle_pointer_event(PointerEvent::Leave);

        // Re-entering must not extend the frozen stroke
        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(90.0, 90.0),
        });
        match &canvas.document.commands()[0] {
            Command::Stroke(stroke) => assert_eq!(stroke.len(), 1),
            other => panic!("expected a stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_undo_mid_drag_removes_whole_stroke() {
        let mut canvas = Canvas::new();

        canvas.handle_pointer_event(PointerEvent::Down {
            position: Point::new(0.0, 0.0),
            button: MouseButton::Left,
        });
        canvas.handle_pointer_event(PointerEvent::Move {
            position: Point::new(10.0, 10.0),
        });

        assert!(canvas.undo());
        assert!(canvas.document.is_empty());
        assert!(!canvas.tools.is_active());
    }
}
