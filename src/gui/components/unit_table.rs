// src/gui/components/unit_table.rs
use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::model::GeographicalUnit;

/// Code / name / parent / children, one row per unit.
pub fn draw(ui: &mut egui::Ui, id: &str, units: &[GeographicalUnit]) {
    let with_parent = units.iter().any(|u| u.parent_code.is_some());
    let with_children = units.iter().any(|u| u.children.is_some());

    ui.push_id(id, |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .min_scrolled_height(0.0)
            .column(Column::initial(110.0).resizable(true).clip(true))
            .column(Column::initial(260.0).resizable(true).clip(true));
        if with_parent { table = table.column(Column::initial(110.0).resizable(true)); }
        if with_children { table = table.column(Column::remainder()); }

        table
            .header(22.0, |mut header| {
                header.col(|ui| { ui.label(RichText::new("Code").strong()); });
                header.col(|ui| { ui.label(RichText::new("Name").strong()); });
                if with_parent { header.col(|ui| { ui.label(RichText::new("Parent").strong()); }); }
                if with_children { header.col(|ui| { ui.label(RichText::new("Children").strong()); }); }
            })
            .body(|body| {
                body.rows(20.0, units.len(), |mut row| {
                    let u = &units[row.index()];
                    row.col(|ui| { ui.label(&u.code); });
                    row.col(|ui| { ui.label(&u.name); });
                    if with_parent {
                        row.col(|ui| { ui.label(u.parent_code.as_deref().unwrap_or("")); });
                    }
                    if with_children {
                        row.col(|ui| {
                            ui.label(u.children.map(|n| n.to_string()).unwrap_or_default());
                        });
                    }
                });
            });
    });
}
