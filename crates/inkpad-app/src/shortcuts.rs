//! Keyboard shortcut registry and handling.

use inkpad_core::canvas::Canvas;

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }
}

/// Get all registered shortcuts.
pub fn all() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Z", true, false, "Undo"),
        Shortcut::new("Z", true, true, "Redo"),
        Shortcut::new("Y", true, false, "Redo"),
        Shortcut::new("Escape", false, false, "Finish the current stroke"),
    ]
}

/// Consume and apply keyboard shortcuts for this frame.
pub fn handle(ctx: &egui::Context, canvas: &mut Canvas) {
    // Check Ctrl+Shift+Z before Ctrl+Z so the modifier-superset wins
    let redo = ctx.input_mut(|i| {
        i.consume_key(
            egui::Modifiers::COMMAND | egui::Modifiers::SHIFT,
            egui::Key::Z,
        ) || i.consume_key(egui::Modifiers::COMMAND, egui::Key::Y)
    });
    if redo {
        canvas.redo();
        return;
    }

    if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z)) {
        canvas.undo();
    }

    if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape)) {
        canvas.finish_active();
    }
}
