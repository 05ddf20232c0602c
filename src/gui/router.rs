// src/gui/router.rs
use eframe::egui;

use crate::session::View::{self, *};
use super::{app::App, pages};

pub fn all_views() -> &'static [View] {
    &View::ALL
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    match app.session.view {
        CaseSearch         => pages::case_search::draw(ui, app),
        CourtDataSelection => pages::court_data::draw(ui, app),
        QuickDownload      => pages::quick_download::draw(ui, app),
        Geographical       => pages::geographical::draw(ui, app),
    }
}
