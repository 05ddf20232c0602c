// src/gui/components/tabs.rs
//
// Top tabs. The switch itself (and any first-visit loading) lives in
// `App::switch_view`.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cur = app.session.view;
    let mut picked = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        for &view in router::all_views() {
            let selected = view == cur;
            if ui.selectable_label(selected, view.label()).clicked() && !selected {
                picked = Some(view);
            }
        }
    });

    if let Some(view) = picked {
        app.switch_view(ui.ctx(), view);
    }
}
