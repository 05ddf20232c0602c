// src/gui/pages/quick_download.rs
use eframe::egui;

use crate::{
    gui::app::App,
    model::{DataType, DateType},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let enabled = !app.session.is_loading();

    ui.heading("Quick Downloads");
    ui.add_space(4.0);
    ui.label(egui::RichText::new("Cause lists").strong());

    let mut quick = None;
    ui.horizontal(|ui| {
        if ui.add_enabled(enabled, egui::Button::new("Today's Cause List")).clicked() {
            quick = Some(DateType::Today);
        }
        if ui.add_enabled(enabled, egui::Button::new("Tomorrow's Cause List")).clicked() {
            quick = Some(DateType::Tomorrow);
        }
    });
    if let Some(date_type) = quick {
        let job = app.session.begin_quick_download(date_type);
        app.spawn_opt(ui.ctx(), job);
    }

    ui.add_space(8.0);
    ui.label(egui::RichText::new("Export data (JSON)").strong());

    let mut export = None;
    ui.horizontal(|ui| {
        for data_type in DataType::ALL {
            if ui.add_enabled(enabled, egui::Button::new(format!("Export {}", data_type.label()))).clicked() {
                export = Some(data_type);
            }
        }
    });
    if let Some(data_type) = export {
        let job = app.session.begin_export(data_type);
        app.spawn_opt(ui.ctx(), job);
    }

    ui.add_space(8.0);
    ui.label(
        egui::RichText::new(format!("Files are saved to {}", app.state.options.export.out_dir().display()))
            .weak(),
    );
}
