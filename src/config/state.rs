// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Output dir text field; applied to ExportOptions on save or Enter
    pub out_dir_text: String,
    pub out_dir_dirty: bool,

    /// Court Data page -> date text field (YYYY-MM-DD)
    pub date_text: String,
}

impl GuiState {
    pub fn for_options(options: &AppOptions) -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            out_dir_text: options.export.out_dir().to_string_lossy().into_owned(),
            out_dir_dirty: false,
            date_text: s!(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState::for_options(&options);
        Self { options, gui }
    }

    /// Push a dirty output-dir text field into the export options.
    pub fn apply_out_dir_text(&mut self) {
        if self.gui.out_dir_dirty {
            self.options.export.set_dir(&self.gui.out_dir_text);
            logf!("Export: Out dir set → {}", self.options.export.out_dir().display());
            self.gui.out_dir_dirty = false;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppOptions::default())
    }
}
