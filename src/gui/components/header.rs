// src/gui/components/header.rs
use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;
use crate::session::ServerStatus;

fn status_color(status: ServerStatus) -> Color32 {
    match status {
        ServerStatus::Online => Color32::from_rgb(40, 160, 80),
        ServerStatus::Offline => Color32::from_rgb(200, 60, 60),
        ServerStatus::Checking | ServerStatus::Unknown => Color32::GRAY,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading("eCourts Desk");
        ui.label(RichText::new("Case search, cause lists and court data").weak());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let status = app.session.server_status();
            let checking = status == ServerStatus::Checking;

            if ui.add_enabled(!checking, egui::Button::new("Test Connection")).clicked() {
                let job = app.session.begin_health();
                app.spawn(ui.ctx(), job);
            }
            if checking {
                ui.spinner();
            }
            if status != ServerStatus::Unknown {
                ui.label(RichText::new(status.label()).color(status_color(status)).strong());
            }

            if let Some(stats) = app.session.header_stats() {
                ui.separator();
                ui.label(format!("{} courts", stats.courts));
                ui.label(format!("{} districts", stats.districts));
                ui.label(format!("{} states", stats.states));
            }
        });
    });
}
