// src/gateway/http.rs
use reqwest::blocking::{Client, Response};
use serde::Serialize;
use serde_json::Value;

use super::Gateway;
use crate::config::options::ApiOptions;
use crate::core::net::{self, read_blob, read_json};
use crate::error::{GatewayError, Result};
use crate::model::{
    units_from_listing, Ancestors, CauseListRequest, DataType, DateType, ExportFormat,
    ExportRequest, GeographicalData, GeographicalUnit, Level, SearchQuery, SearchResult,
    requests::QuickCauseListRequest,
};

const HEALTH: &str = "/api/health";
const SEARCH: &str = "/api/search";
const CAUSE_LIST: &str = "/api/cause-list";
const EXPORT_DATA: &str = "/api/export-data";
const GEOGRAPHICAL_DATA: &str = "/api/geographical-data";
const DISTRICTS: &str = "/api/districts";
const COURT_COMPLEXES: &str = "/api/court-complexes";
const COURTS: &str = "/api/courts";

/// Blocking JSON-over-HTTP gateway. Cheap to clone; clones share the
/// connection pool.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    api: ApiOptions,
}

impl HttpGateway {
    pub fn new(api: &ApiOptions) -> Result<Self> {
        Ok(Self { client: net::build_client(api)?, api: api.clone() })
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    fn get(&self, path: &str) -> Result<Response> {
        logd!("HTTP: GET {}", path);
        Ok(self.client.get(self.api.endpoint(path)).send()?)
    }

    fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        logd!("HTTP: POST {}", path);
        Ok(self.client.post(self.api.endpoint(path)).json(body).send()?)
    }

    fn options_path(level: Level) -> Option<&'static str> {
        match level {
            Level::State => None,
            Level::District => Some(DISTRICTS),
            Level::CourtComplex => Some(COURT_COMPLEXES),
            Level::Court => Some(COURTS),
        }
    }
}

impl Gateway for HttpGateway {
    fn health(&self) -> Result<()> {
        net::check_status(self.get(HEALTH)?)?;
        Ok(())
    }

    fn fetch_options(&self, level: Level, ancestors: &Ancestors) -> Result<Vec<GeographicalUnit>> {
        let payload: Value = match Self::options_path(level) {
            None => read_json(self.get(DataType::States.listing_path())?)?,
            Some(path) => read_json(self.post(path, ancestors)?)?,
        };
        units_from_listing(payload, level.plural_key())
    }

    fn listing(&self, kind: DataType) -> Result<Vec<GeographicalUnit>> {
        let payload = read_json(self.get(kind.listing_path())?)?;
        units_from_listing(payload, kind.as_str())
    }

    fn geographical_data(&self) -> Result<GeographicalData> {
        let doc = read_json(self.get(GEOGRAPHICAL_DATA)?)?;
        Ok(GeographicalData::new(doc))
    }

    fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
        // Only 2xx bodies are read for `error`; a failed search reports the status.
        let v = read_json(self.post(SEARCH, query)?).map_err(|e| match e {
            GatewayError::Status { status, .. } => GatewayError::Status {
                status,
                message: format!("HTTP error! status: {status}"),
            },
            other => other,
        })?;
        SearchResult::from_value(v)
    }

    fn quick_cause_list(&self, date_type: DateType) -> Result<Vec<u8>> {
        read_blob(self.post(CAUSE_LIST, &QuickCauseListRequest { date_type })?)
    }

    fn court_cause_list(&self, request: &CauseListRequest) -> Result<Vec<u8>> {
        read_blob(self.post(CAUSE_LIST, request)?)
    }

    fn export_data(&self, format: ExportFormat, data_type: DataType) -> Result<Vec<u8>> {
        read_blob(self.post(EXPORT_DATA, &ExportRequest { format, data_type })?)
    }
}
