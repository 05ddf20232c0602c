// src/gui/pages/court_data.rs
//
// State → district → court complex → court, a cause-list date, and the
// downloads that depend on them.

use eframe::egui;

use crate::{
    gui::app::App,
    model::{DownloadType, Level},
    selection::DownloadAction,
};

/// One combo per level. Returns the (level, code) the user picked, if any.
fn level_combo(ui: &mut egui::Ui, app: &App, level: Level) -> Option<(Level, String)> {
    let session = &app.session;
    let parent_ready = level.parent().is_none_or(|p| session.selection().is_set(p));
    let enabled = parent_ready && !session.is_loading();

    let current = session.selection().code(level);
    let shown = match session.cascade().chosen(session.selection(), level) {
        Some(unit) => unit.label(level),
        None => match current {
            Some(code) => s!(code),
            None => format!("Select {}", level.label()),
        },
    };

    let mut picked = None;
    ui.label(level.label());
    ui.add_enabled_ui(enabled, |ui| {
        egui::ComboBox::from_id_salt(("court_level", level.index()))
            .selected_text(shown)
            .width(320.0)
            .show_ui(ui, |ui| {
                if ui.selectable_label(current.is_none(), format!("Select {}", level.label())).clicked() {
                    picked = Some((level, s!()));
                }
                for unit in session.options(level) {
                    let selected = current == Some(unit.code.as_str());
                    if ui.selectable_label(selected, unit.label(level)).clicked() && !selected {
                        picked = Some((level, unit.code.clone()));
                    }
                }
            });
    });
    ui.end_row();
    picked
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("Court Data");
        if ui.add_enabled(!app.session.is_loading(), egui::Button::new("Reload states")).clicked() {
            let job = app.session.load_states();
            app.spawn(ui.ctx(), job);
        }
    });
    ui.add_space(4.0);

    let mut picked = None;
    egui::Grid::new("court_selection").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
        for level in Level::ALL {
            if let Some(p) = level_combo(ui, app, level) {
                picked = Some(p);
            }
        }
    });
    if let Some((level, code)) = picked {
        let job = app.session.select(level, &code);
        app.spawn_opt(ui.ctx(), job);
    }

    // --- cause list date ---
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label("Cause list date:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.date_text)
                .hint_text("YYYY-MM-DD")
                .desired_width(110.0),
        );
        // A refused date puts the field back to the date actually in use.
        let mut moved = resp.lost_focus() && !app.session.set_date_text(&app.state.gui.date_text);
        if ui.button("Today").clicked() {
            app.session.set_today();
            moved = true;
        }
        if ui.button("Tomorrow").clicked() {
            app.session.set_tomorrow();
            moved = true;
        }
        if moved {
            app.state.gui.date_text = app.session.date_text();
        }
    });

    // --- downloads ---
    ui.add_space(8.0);
    ui.separator();
    ui.label(egui::RichText::new("Downloads").strong());

    let mut start = None;
    ui.horizontal_wrapped(|ui| {
        for kind in DownloadType::ALL {
            let action = DownloadAction::CourtCauseList(kind);
            if ui.add_enabled(app.session.is_enabled(action), egui::Button::new(action.label())).clicked() {
                start = Some(kind);
            }
        }
    });
    if let Some(kind) = start {
        let job = app.session.begin_court_download(kind);
        app.spawn_opt(ui.ctx(), job);
    }

    let snapshot = DownloadAction::SelectionSnapshot;
    if ui.add_enabled(app.session.is_enabled(snapshot), egui::Button::new(snapshot.label())).clicked() {
        let downloads = app.downloads();
        app.session.save_selection(&downloads);
    }

    // --- summary ---
    let mut save_geo = false;
    if let Some(geo) = app.session.geographical() {
        ui.add_space(8.0);
        ui.separator();
        ui.label(egui::RichText::new("Geographical summary").strong());
        if let Some(n) = geo.total_states() { ui.label(format!("States: {n}")); }
        if let Some(n) = geo.total_districts() { ui.label(format!("Districts: {n}")); }
        save_geo = ui.button("Download Complete Geographical Data").clicked();
    }
    if save_geo {
        let downloads = app.downloads();
        app.session.save_geographical(&downloads);
    }
}
