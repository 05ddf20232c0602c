// src/gui/components/mod.rs
pub mod alerts;
pub mod header;
pub mod out_dir_bar;
pub mod result_table;
pub mod tabs;
pub mod unit_table;
