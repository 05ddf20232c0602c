// tests/common/mod.rs
//
// Hand-written Gateway for driving a Session without a server.
#![allow(dead_code)]

pub mod stub_server;

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{NaiveDate, TimeZone, Utc};
use ecourts_desk::error::{GatewayError, Result};
use ecourts_desk::gateway::Gateway;
use ecourts_desk::model::{
    Ancestors, CauseListRequest, DataType, DateType, ExportFormat, GeographicalData,
    GeographicalUnit, Level, SearchQuery, SearchResult,
};
use ecourts_desk::session::Clock;

/// 2026-10-18 noon UTC.
pub fn fixed_clock() -> Clock {
    Clock::Fixed(Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap())
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn units(pairs: &[(&str, &str)]) -> Vec<GeographicalUnit> {
    pairs.iter().map(|(c, n)| GeographicalUnit::new(*c, *n)).collect()
}

/// What the fake was asked to do, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Health,
    Options(Level, Ancestors),
    Listing(DataType),
    Geo,
    Search(SearchQuery),
    QuickCauseList(DateType),
    CourtCauseList(CauseListRequest),
    Export(DataType),
}

/// Canned replies. Anything not configured answers with a network error.
#[derive(Default)]
pub struct FakeGateway {
    pub healthy: bool,
    pub options: HashMap<Level, Vec<GeographicalUnit>>,
    pub search: Option<std::result::Result<SearchResult, String>>,
    pub blob: Option<Vec<u8>>,
    pub geo: Option<serde_json::Value>,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, level: Level, list: Vec<GeographicalUnit>) -> Self {
        self.options.insert(level, list);
        self
    }

    pub fn with_search(mut self, r: SearchResult) -> Self {
        self.search = Some(Ok(r));
        self
    }

    /// A 2xx search reply carrying an `error` field.
    pub fn with_search_error(mut self, msg: &str) -> Self {
        self.search = Some(Err(msg.to_string()));
        self
    }

    pub fn with_blob(mut self, bytes: &[u8]) -> Self {
        self.blob = Some(bytes.to_vec());
        self
    }

    pub fn with_geo(mut self, doc: serde_json::Value) -> Self {
        self.geo = Some(doc);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn offline() -> GatewayError {
        GatewayError::Network("connection refused".into())
    }

    fn blob_or_offline(&self) -> Result<Vec<u8>> {
        match &self.blob {
            Some(b) if b.is_empty() => Err(GatewayError::EmptyBody),
            Some(b) => Ok(b.clone()),
            None => Err(Self::offline()),
        }
    }
}

impl Gateway for FakeGateway {
    fn health(&self) -> Result<()> {
        self.record(Call::Health);
        if self.healthy { Ok(()) } else { Err(Self::offline()) }
    }

    fn fetch_options(&self, level: Level, ancestors: &Ancestors) -> Result<Vec<GeographicalUnit>> {
        self.record(Call::Options(level, ancestors.clone()));
        self.options.get(&level).cloned().ok_or_else(Self::offline)
    }

    fn listing(&self, kind: DataType) -> Result<Vec<GeographicalUnit>> {
        self.record(Call::Listing(kind));
        let level = match kind {
            DataType::States => Level::State,
            DataType::Districts | DataType::Taluks => Level::District,
        };
        self.options.get(&level).cloned().ok_or_else(Self::offline)
    }

    fn geographical_data(&self) -> Result<GeographicalData> {
        self.record(Call::Geo);
        self.geo.clone().map(GeographicalData::new).ok_or_else(Self::offline)
    }

    fn search(&self, query: &SearchQuery) -> Result<SearchResult> {
        self.record(Call::Search(query.clone()));
        match &self.search {
            Some(Ok(r)) => Ok(r.clone()),
            Some(Err(msg)) => Err(GatewayError::Server(msg.clone())),
            None => Err(Self::offline()),
        }
    }

    fn quick_cause_list(&self, date_type: DateType) -> Result<Vec<u8>> {
        self.record(Call::QuickCauseList(date_type));
        self.blob_or_offline()
    }

    fn court_cause_list(&self, request: &CauseListRequest) -> Result<Vec<u8>> {
        self.record(Call::CourtCauseList(request.clone()));
        self.blob_or_offline()
    }

    fn export_data(&self, _format: ExportFormat, data_type: DataType) -> Result<Vec<u8>> {
        self.record(Call::Export(data_type));
        self.blob_or_offline()
    }
}
