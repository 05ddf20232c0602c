// src/gui/pages/case_search.rs
use eframe::egui;

use crate::{
    gui::{app::App, components::result_table},
    model::SearchMode,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Case Search");
    ui.add_space(4.0);

    let mut mode = app.session.form.mode;
    ui.horizontal(|ui| {
        ui.label("Search by:");
        ui.selectable_value(&mut mode, SearchMode::Cnr, "CNR Number");
        ui.selectable_value(&mut mode, SearchMode::Details, "Case Details");
    });
    if mode != app.session.form.mode {
        logf!("UI: Search mode → {:?}", mode);
        app.session.set_search_mode(mode);
    }

    let mut submit = false;
    egui::Grid::new("search_form").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
        let form = &mut app.session.form;
        let mut field = |ui: &mut egui::Ui, label: &str, text: &mut String, hint: &str| {
            ui.label(label);
            let resp = ui.add(egui::TextEdit::singleline(text).hint_text(hint).desired_width(260.0));
            submit |= resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.end_row();
        };
        match form.mode {
            SearchMode::Cnr => field(ui, "CNR Number", &mut form.cnr, "e.g. DLHI010001232024"),
            SearchMode::Details => {
                field(ui, "Case Type", &mut form.case_type, "e.g. CIVIL");
                field(ui, "Case Number", &mut form.case_number, "e.g. 123");
                field(ui, "Case Year", &mut form.case_year, "e.g. 2024");
            }
        }
    });

    ui.add_space(4.0);
    let loading = app.session.is_loading();
    ui.horizontal(|ui| {
        let label = if loading { "Searching…" } else { "Search" };
        submit |= ui.add_enabled(!loading, egui::Button::new(label)).clicked();
        if ui.button("Reset").clicked() {
            logf!("UI: Search form reset");
            app.session.reset_form();
        }
    });

    if submit && !loading {
        let job = app.session.begin_search();
        app.spawn_opt(ui.ctx(), job);
    }

    if let Some(result) = app.session.result() {
        ui.add_space(8.0);
        ui.separator();
        ui.label(egui::RichText::new("Case Details").strong());
        result_table::draw(ui, result);
    }
}
