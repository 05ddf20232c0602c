// src/gui/pages/mod.rs
//
// One module per View. Each page only draws from `app.session` and turns
// clicks into Session calls; any Job it gets back goes to `app.spawn`.

pub mod case_search;
pub mod court_data;
pub mod geographical;
pub mod quick_download;
