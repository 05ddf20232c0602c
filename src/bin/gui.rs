// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use ecourts_desk::{
    config::{consts::STORE_DIR, options::AppOptions, state::AppState},
    gui,
};
use eframe::egui::ViewportBuilder;

fn main() {
    if let Err(e) = ecourts_desk::log::init_file(Path::new(STORE_DIR)) {
        eprintln!("Logging disabled: {e}");
    }

    let state = AppState::new(AppOptions::from_env());
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("eCourts Desk")
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
