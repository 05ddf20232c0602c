// src/model/mod.rs
//
// Wire and domain types. Everything here is a transient value: built from a
// response, shown, replaced by the next response.

mod lenient;

pub mod geo;
pub mod requests;
pub mod search;

pub use geo::{units_from_listing, DataType, GeographicalData, GeographicalUnit, Level};
pub use requests::{Ancestors, CauseListRequest, DateType, DownloadType, ExportFormat, ExportRequest};
pub use search::{ListingStatus, SearchMode, SearchQuery, SearchResult};
