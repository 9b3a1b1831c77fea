//! Toolbar UI: tools, marker options, sticker palette, history actions.

use crate::app::InkpadApp;
use inkpad_core::tools::ToolKind;
use inkpad_render::to_color32;
use inkpad_widgets::{ColorSwatch, GlyphButton, WidthButton, layout};

/// Build the toolbar: marker row on top, sticker row below.
pub fn toolbar(ui: &mut egui::Ui, app: &mut InkpadApp) {
    ui.add_space(4.0);
    ui.horizontal(|ui| marker_row(ui, app));
    ui.horizontal(|ui| sticker_row(ui, app));
    ui.add_space(4.0);
}

fn marker_row(ui: &mut egui::Ui, app: &mut InkpadApp) {
    let tools = &mut app.canvas.tools;
    let marker_active = tools.current_tool() == ToolKind::Marker;

    layout::section_label(ui, "Marker");

    if GlyphButton::new("✏", "Marker")
        .selected(marker_active)
        .show(ui)
    {
        tools.set_tool(ToolKind::Marker);
    }

    for &width in &app.config.width_presets {
        let selected = marker_active && (tools.marker_width() - width).abs() < 0.25;
        let tooltip = format!("{width:.0} px");
        if WidthButton::new(width as f32, &tooltip, selected).show(ui) {
            tools.set_marker_width(width);
            tools.set_tool(ToolKind::Marker);
        }
    }

    let mut width = tools.marker_width() as f32;
    let slider = ui.add(
        egui::Slider::new(&mut width, 1.0..=24.0)
            .show_value(false)
            .text("px"),
    );
    if slider.changed() {
        tools.set_marker_width(width as f64);
        tools.set_tool(ToolKind::Marker);
    }

    layout::vertical_separator(ui);

    for &color in &app.config.marker_palette {
        let selected = tools.marker_color() == color;
        if ColorSwatch::new(to_color32(color), "Marker color")
            .selected(selected)
            .show(ui)
        {
            tools.set_marker_color(color);
            tools.set_tool(ToolKind::Marker);
        }
    }

    layout::vertical_separator(ui);

    if ui
        .add_enabled(app.canvas.document.can_undo(), egui::Button::new("⟲ Undo"))
        .on_hover_text("Ctrl+Z")
        .clicked()
    {
        app.canvas.undo();
    }
    if ui
        .add_enabled(app.canvas.document.can_redo(), egui::Button::new("⟳ Redo"))
        .on_hover_text("Ctrl+Shift+Z")
        .clicked()
    {
        app.canvas.redo();
    }
    let clearable = app.canvas.document.can_undo() || app.canvas.document.can_redo();
    if ui
        .add_enabled(clearable, egui::Button::new("🗑 Clear"))
        .clicked()
    {
        app.canvas.clear();
    }
}

fn sticker_row(ui: &mut egui::Ui, app: &mut InkpadApp) {
    let tools = &mut app.canvas.tools;
    let sticker_active = tools.current_tool() == ToolKind::Sticker;

    layout::section_label(ui, "Stickers");

    let palette: Vec<String> = tools.palette().to_vec();
    for glyph in &palette {
        let selected = sticker_active && tools.sticker_glyph() == glyph;
        if GlyphButton::new(glyph, "Sticker").selected(selected).show(ui) {
            tools.select_sticker(glyph);
        }
    }

    layout::vertical_separator(ui);

    let field = ui.add(
        egui::TextEdit::singleline(&mut app.custom_sticker)
            .desired_width(64.0)
            .hint_text("Custom…"),
    );
    let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
    if (ui.button("Add").clicked() || submitted)
        && app.canvas.tools.add_custom_sticker(&app.custom_sticker)
    {
        app.custom_sticker.clear();
    }
}
