use egui::color_picker::{self, Alpha};

use crate::app::{STICKERS, SketchpadApp};

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");
            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.editor().can_undo();
                let can_redo = app.editor().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.editor_mut().request_undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.editor_mut().request_redo();
                }
                if ui.button("Clear").clicked() {
                    app.editor_mut().request_clear();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color = app.editor().tool_state().color();
                if color_picker::color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                    app.editor_mut().set_color32(color);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Size (1-5):");
                let response = ui.add(
                    egui::TextEdit::singleline(app.size_text_mut()).desired_width(40.0),
                );
                if response.lost_focus() {
                    app.commit_size_text();
                }
            });

            ui.separator();
            ui.label("Stickers");

            ui.horizontal_wrapped(|ui| {
                let selected = app.editor().tool_state().selected_sticker().map(str::to_owned);
                for &glyph in STICKERS {
                    let is_selected = selected.as_deref() == Some(glyph);
                    if ui.selectable_label(is_selected, glyph).clicked() {
                        let next = (!is_selected).then(|| glyph.to_owned());
                        log::info!("Sticker selected from UI: {next:?}");
                        app.editor_mut().select_sticker(next);
                    }
                }
            });

            ui.separator();
            let history = app.editor().history();
            ui.label(format!("Undo stack size: {}", history.undo_len()));
            ui.label(format!("Redo stack size: {}", history.redo_len()));
        });
}
