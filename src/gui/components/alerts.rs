// src/gui/components/alerts.rs
use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut dismiss_error = false;
    let mut dismiss_notice = false;

    if let Some(err) = app.session.error() {
        ui.horizontal(|ui| {
            ui.label(RichText::new(err).color(Color32::from_rgb(200, 60, 60)));
            dismiss_error = ui.small_button("✕").clicked();
        });
    }
    if let Some(msg) = app.session.notice() {
        ui.horizontal(|ui| {
            ui.label(RichText::new(msg).color(Color32::from_rgb(40, 160, 80)));
            dismiss_notice = ui.small_button("✕").clicked();
        });
    }
    if app.session.is_loading() {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label("Loading…");
        });
    }

    if dismiss_error { app.session.dismiss_error(); }
    if dismiss_notice { app.session.dismiss_notice(); }
}
