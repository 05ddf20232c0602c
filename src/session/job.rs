// src/session/job.rs
//
// The network half of an action. A Job owns everything it needs so it can
// run on a worker thread; its Outcome goes back to the UI thread and is
// applied by `Session::apply`.

use std::fmt;
use std::path::PathBuf;

use crate::error::Result;
use crate::file::Downloads;
use crate::gateway::Gateway;
use crate::model::{
    CauseListRequest, DataType, DateType, ExportFormat, GeographicalData, GeographicalUnit,
    SearchQuery, SearchResult,
};
use crate::selection::FetchRequest;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Job {
    Health,
    FetchOptions(FetchRequest),
    Listing(DataType),
    GeographicalData,
    Search(SearchQuery),
    QuickCauseList { date_type: DateType, file_name: String },
    CourtCauseList { request: CauseListRequest, file_name: String },
    Export { data_type: DataType, file_name: String },
}

/// What a saved file was, for status messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveTarget {
    CauseList,
    Export(DataType),
}

impl fmt::Display for SaveTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveTarget::CauseList => f.write_str("cause list"),
            SaveTarget::Export(dt) => write!(f, "{dt} data"),
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Health(Result<()>),
    Options { request: FetchRequest, result: Result<Vec<GeographicalUnit>> },
    Listing { kind: DataType, result: Result<Vec<GeographicalUnit>> },
    GeographicalData(Result<GeographicalData>),
    Search(Result<SearchResult>),
    Saved { target: SaveTarget, result: Result<PathBuf> },
}

impl Job {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Job::Health => "health",
            Job::FetchOptions(_) => "options",
            Job::Listing(_) => "listing",
            Job::GeographicalData => "geographical-data",
            Job::Search(_) => "search",
            Job::QuickCauseList { .. } => "quick-cause-list",
            Job::CourtCauseList { .. } => "court-cause-list",
            Job::Export { .. } => "export",
        }
    }

    /// Blocking. Downloads are written to `downloads` before returning.
    pub fn run(self, gateway: &dyn Gateway, downloads: &Downloads) -> Outcome {
        logd!("Job: run {}", self.name());
        match self {
            Job::Health => Outcome::Health(gateway.health()),
            Job::FetchOptions(request) => {
                let result = gateway.fetch_options(request.level, &request.ancestors);
                Outcome::Options { request, result }
            }
            Job::Listing(kind) => Outcome::Listing { kind, result: gateway.listing(kind) },
            Job::GeographicalData => Outcome::GeographicalData(gateway.geographical_data()),
            Job::Search(query) => Outcome::Search(gateway.search(&query)),
            Job::QuickCauseList { date_type, file_name } => Outcome::Saved {
                target: SaveTarget::CauseList,
                result: gateway
                    .quick_cause_list(date_type)
                    .and_then(|bytes| downloads.save(&file_name, &bytes)),
            },
            Job::CourtCauseList { request, file_name } => Outcome::Saved {
                target: SaveTarget::CauseList,
                result: gateway
                    .court_cause_list(&request)
                    .and_then(|bytes| downloads.save(&file_name, &bytes)),
            },
            Job::Export { data_type, file_name } => Outcome::Saved {
                target: SaveTarget::Export(data_type),
                result: gateway
                    .export_data(ExportFormat::Json, data_type)
                    .and_then(|bytes| downloads.save(&file_name, &bytes)),
            },
        }
    }
}
