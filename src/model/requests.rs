// src/model/requests.rs
use std::fmt;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use super::geo::{DataType, Level};

/// Quick cause lists, relative to the server's today.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DateType {
    Today,
    Tomorrow,
}

impl DateType {
    pub fn as_str(self) -> &'static str {
        match self {
            DateType::Today => "today",
            DateType::Tomorrow => "tomorrow",
        }
    }

    /// Calendar date this resolves to, given today.
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            DateType::Today => today,
            DateType::Tomorrow => today.checked_add_days(Days::new(1)).unwrap_or(today),
        }
    }
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope of a court-level cause list download.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadType {
    /// One court; needs a court selected
    Single,
    /// Every court in the complex
    All,
    /// Complex-level data
    Complex,
}

impl DownloadType {
    pub const ALL: [DownloadType; 3] = [DownloadType::Single, DownloadType::All, DownloadType::Complex];

    pub fn as_str(self) -> &'static str {
        match self {
            DownloadType::Single => "single",
            DownloadType::All => "all",
            DownloadType::Complex => "complex",
        }
    }

    /// Deepest level that must be chosen before this download makes sense.
    pub fn required_level(self) -> Level {
        match self {
            DownloadType::Single => Level::Court,
            DownloadType::All | DownloadType::Complex => Level::CourtComplex,
        }
    }
}

impl fmt::Display for DownloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
}

/// Chosen ancestor codes; also the body of the scoped option requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Ancestors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_complex_code: Option<String>,
}

impl Ancestors {
    /// Code for `level`, if it's one of the ancestor levels and set.
    pub fn get(&self, level: Level) -> Option<&str> {
        match level {
            Level::State => self.state_code.as_deref(),
            Level::District => self.district_code.as_deref(),
            Level::CourtComplex => self.court_complex_code.as_deref(),
            Level::Court => None,
        }
    }
}

/// Body of `POST /api/cause-list` for a selected court or complex.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CauseListRequest {
    pub state_code: String,
    pub district_code: String,
    pub court_complex_code: String,
    pub date: NaiveDate,
    pub download_type: DownloadType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_code: Option<String>,
}

/// Body of `POST /api/cause-list` for the quick today/tomorrow lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuickCauseListRequest {
    pub date_type: DateType,
}

/// Body of `POST /api/export-data`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub data_type: DataType,
}
