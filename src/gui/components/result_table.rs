// src/gui/components/result_table.rs
use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::model::{ListingStatus, SearchResult};

pub fn draw(ui: &mut egui::Ui, result: &SearchResult) {
    let rows = result.rows();
    let listed = result.listing() != ListingStatus::NotListed;

    ui.push_id("case_result", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::initial(160.0).resizable(true))
            .column(Column::remainder().clip(true))
            .header(22.0, |mut header| {
                header.col(|ui| { ui.label(RichText::new("Field").strong()); });
                header.col(|ui| { ui.label(RichText::new("Value").strong()); });
            })
            .body(|mut body| {
                for (label, value) in &rows {
                    body.row(20.0, |mut row| {
                        row.col(|ui| { ui.label(*label); });
                        row.col(|ui| {
                            if *label == "Listing Status" && listed {
                                ui.label(RichText::new(value).strong());
                            } else {
                                ui.label(value);
                            }
                        });
                    });
                }
            });
    });
}
