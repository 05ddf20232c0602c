// src/gui/pages/geographical.rs
use eframe::egui::{self, RichText};

use crate::{
    gui::{app::App, components::unit_table},
    model::DataType,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let enabled = !app.session.is_loading();

    ui.heading("Geographical Data");
    ui.add_space(4.0);

    let mut load_geo = false;
    let mut save_geo = false;
    ui.horizontal(|ui| {
        load_geo = ui.add_enabled(enabled, egui::Button::new("Load Geographical Data")).clicked();
        save_geo = ui
            .add_enabled(app.session.geographical().is_some(), egui::Button::new("Save as JSON"))
            .clicked();
    });
    if load_geo {
        let job = app.session.begin_geographical_data();
        app.spawn_opt(ui.ctx(), job);
    }
    if save_geo {
        let downloads = app.downloads();
        app.session.save_geographical(&downloads);
    }

    if let Some(geo) = app.session.geographical() {
        ui.horizontal(|ui| {
            if let Some(n) = geo.total_states() { ui.label(format!("{n} states")); }
            if let Some(n) = geo.total_districts() { ui.label(format!("{n} districts")); }
        });
        egui::CollapsingHeader::new("Raw document").id_salt("geo_raw").show(ui, |ui| {
            let pretty = serde_json::to_string_pretty(geo.doc()).unwrap_or_default();
            egui::ScrollArea::vertical().id_salt("geo_raw_scroll").max_height(240.0).show(ui, |ui| {
                ui.monospace(pretty);
            });
        });
    }

    ui.add_space(8.0);
    ui.separator();
    ui.label(RichText::new("Listings").strong());

    let mut list = None;
    ui.horizontal(|ui| {
        for kind in DataType::ALL {
            let current = app.session.listing().map(|(k, _)| k) == Some(kind);
            if ui.add_enabled(enabled, egui::Button::new(kind.label()).selected(current)).clicked() {
                list = Some(kind);
            }
        }
    });
    if let Some(kind) = list {
        let job = app.session.begin_listing(kind);
        app.spawn_opt(ui.ctx(), job);
    }

    if let Some((kind, units)) = app.session.listing() {
        ui.label(format!("{} {}", units.len(), kind.label().to_lowercase()));
        unit_table::draw(ui, "listing_table", units);
    }
}
