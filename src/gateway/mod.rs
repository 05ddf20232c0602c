// src/gateway/mod.rs
//
// Everything the app asks of the remote API. The UI and CLI only see this
// trait; `HttpGateway` is the real thing, tests plug in fakes.

mod http;

pub use http::HttpGateway;

use crate::error::Result;
use crate::model::{
    Ancestors, CauseListRequest, DataType, DateType, ExportFormat, GeographicalData,
    GeographicalUnit, Level, SearchQuery, SearchResult,
};

pub trait Gateway: Send + Sync {
    /// Ok when the server answers `/api/health` with a 2xx.
    fn health(&self) -> Result<()>;

    /// Options for `level`, scoped to the chosen `ancestors`.
    fn fetch_options(&self, level: Level, ancestors: &Ancestors) -> Result<Vec<GeographicalUnit>>;

    /// Whole-country listing (`/api/all-states`, `/api/all-districts`, `/api/all-taluks`).
    fn listing(&self, kind: DataType) -> Result<Vec<GeographicalUnit>>;

    fn geographical_data(&self) -> Result<GeographicalData>;

    fn search(&self, query: &SearchQuery) -> Result<SearchResult>;

    /// Today's or tomorrow's full cause list, as the file bytes.
    fn quick_cause_list(&self, date_type: DateType) -> Result<Vec<u8>>;

    /// Cause list for the selected court or complex, as the file bytes.
    fn court_cause_list(&self, request: &CauseListRequest) -> Result<Vec<u8>>;

    fn export_data(&self, format: ExportFormat, data_type: DataType) -> Result<Vec<u8>>;
}
