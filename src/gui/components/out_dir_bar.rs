// src/gui/components/out_dir_bar.rs
//
// Output directory for every saved file. Edits stay "dirty" until Enter,
// Apply, or the next save.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Save to:");

        let width = ui.available_width() - 80.0;
        let gui = &mut app.state.gui;
        let resp = ui.add(egui::TextEdit::singleline(&mut gui.out_dir_text).desired_width(width));
        if resp.changed() {
            gui.out_dir_dirty = true;
        }
        let entered = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.add_enabled(gui.out_dir_dirty, egui::Button::new("Apply")).clicked() || entered {
            app.state.apply_out_dir_text();
            app.state.gui.out_dir_text = app.state.options.export.out_dir().to_string_lossy().into_owned();
        }
    });
}
