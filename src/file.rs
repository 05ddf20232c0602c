// src/file.rs
//
// Where downloaded content lands, and what it's called.

use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;

use crate::core::sanitize::sanitize_filename_part;
use crate::error::{GatewayError, Result};
use crate::model::{DataType, DateType, DownloadType, GeographicalUnit, Level};
use crate::selection::{Cascade, Selection};

const EXT: &str = "json";

#[inline]
fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `cause_list_<today|tomorrow>_<date>.json`
pub fn quick_cause_list_name(date_type: DateType, today: NaiveDate) -> String {
    format!("cause_list_{}_{}.{EXT}", date_type.as_str(), iso(today))
}

/// `cause_list_<single|all|complex>_<date>.json`, dated by the cause-list date.
pub fn court_cause_list_name(kind: DownloadType, date: NaiveDate) -> String {
    format!("cause_list_{}_{}.{EXT}", kind.as_str(), iso(date))
}

/// `<data_type>_data_<date>.json`
pub fn export_name(data_type: DataType, today: NaiveDate) -> String {
    format!("{}_data_{}.{EXT}", data_type.as_str(), iso(today))
}

/// `court_selection_<state>_<district>_<date>.json`
pub fn selection_name(state: &str, district: &str, today: NaiveDate) -> String {
    format!(
        "court_selection_{}_{}_{}.{EXT}",
        sanitize_filename_part(state, "state"),
        sanitize_filename_part(district, "district"),
        iso(today)
    )
}

/// `geographical_data_<date>.json`
pub fn geographical_name(today: NaiveDate) -> String {
    format!("geographical_data_{}.{EXT}", iso(today))
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(GatewayError::Io(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Output directory for saved files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Downloads {
    dir: PathBuf,
}

impl Downloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` to `<dir>/<file_name>`, overwriting. Empty content is
    /// refused and nothing is written.
    pub fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        if bytes.is_empty() {
            return Err(GatewayError::EmptyBody);
        }
        ensure_directory(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        logf!("Download: Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }

    /// Pretty-printed JSON, same rules as `save`.
    pub fn save_json<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> Result<PathBuf> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.save(file_name, &bytes)
    }
}

/// The current court selection, saved locally without asking the server.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GeographicalUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<GeographicalUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_complex: Option<GeographicalUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court: Option<GeographicalUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub timestamp: String,
}

impl SelectionSnapshot {
    /// Chosen units are looked up in the current option lists; a code that's
    /// no longer listed is left out.
    pub fn capture(sel: &Selection, cascade: &Cascade, now: DateTime<Utc>) -> Self {
        let pick = |level| cascade.chosen(sel, level).cloned();
        Self {
            state: pick(Level::State),
            district: pick(Level::District),
            court_complex: pick(Level::CourtComplex),
            court: pick(Level::Court),
            date: sel.date(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
