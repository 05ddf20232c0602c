// src/model/search.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;
use crate::error::{GatewayError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    Cnr,
    Details,
}

/// Body of `POST /api/search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "search_type", rename_all = "lowercase")]
pub enum SearchQuery {
    Cnr {
        cnr: String,
    },
    Details {
        case_type: String,
        case_number: String,
        case_year: String,
    },
}

/// Whatever the server knows about a case. Nothing is required; absent or
/// blank fields are simply not shown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub case_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub cnr: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub court: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub parties: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub listed_today: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub listed_tomorrow: bool,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub hearing_date: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingStatus {
    Today,
    Tomorrow,
    NotListed,
}

impl ListingStatus {
    pub fn label(self) -> &'static str {
        match self {
            ListingStatus::Today => "Listed Today",
            ListingStatus::Tomorrow => "Listed Tomorrow",
            ListingStatus::NotListed => "Not Listed",
        }
    }
}

impl SearchResult {
    /// Decode a search reply. A body carrying `error` is a failure, never a result.
    pub fn from_value(v: Value) -> Result<Self> {
        if !v.is_object() {
            return Err(GatewayError::Decode(s!("search reply is not an object")));
        }
        if let Some(err) = lenient::error_message(&v) {
            return Err(GatewayError::Server(err));
        }
        Ok(serde_json::from_value(v)?)
    }

    pub fn listing(&self) -> ListingStatus {
        if self.listed_today {
            ListingStatus::Today
        } else if self.listed_tomorrow {
            ListingStatus::Tomorrow
        } else {
            ListingStatus::NotListed
        }
    }

    /// (label, value) pairs in display order, present fields only.
    /// Listing status is always included.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(8);
        let mut push = |label: &'static str, v: &Option<String>| {
            if let Some(v) = v {
                out.push((label, v.clone()));
            }
        };
        push("Case Number", &self.case_number);
        push("CNR", &self.cnr);
        push("Court", &self.court);
        push("Parties", &self.parties);
        push("Status", &self.status);
        out.push(("Listing Status", s!(self.listing().label())));
        if let Some(v) = &self.serial_number {
            out.push(("Serial Number", v.clone()));
        }
        if let Some(v) = &self.hearing_date {
            out.push(("Hearing Date", v.clone()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn query_bodies() {
        let q = SearchQuery::Cnr { cnr: s!("DLHI010001232024") };
        assert_eq!(serde_json::to_value(&q).unwrap(), json!({"search_type": "cnr", "cnr": "DLHI010001232024"}));

        let q = SearchQuery::Details { case_type: s!("CIVIL"), case_number: s!("123"), case_year: s!("2024") };
        assert_eq!(
            serde_json::to_value(&q).unwrap(),
            json!({"search_type": "details", "case_type": "CIVIL", "case_number": "123", "case_year": "2024"})
        );
    }

    #[test]
    fn loose_fields_and_listing() {
        let r = SearchResult::from_value(json!({
            "case_number": "CIVIL/123/2024",
            "court": "",
            "listed_today": 0,
            "listed_tomorrow": "true",
            "serial_number": 512
        }))
        .unwrap();
        assert_eq!(r.court, None);
        assert_eq!(r.serial_number.as_deref(), Some("512"));
        assert_eq!(r.listing(), ListingStatus::Tomorrow);

        let labels: Vec<&str> = r.rows().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Case Number", "Listing Status", "Serial Number"]);
    }

    #[test]
    fn error_body_is_not_a_result() {
        let e = SearchResult::from_value(json!({"error": "Case not found", "cnr": "X"})).unwrap_err();
        assert_eq!(e.user_message(), "Case not found");
    }

    #[test]
    fn falsy_error_field_still_decodes() {
        let r = SearchResult::from_value(json!({"error": false, "cnr": "X"})).unwrap();
        assert_eq!(r.cnr.as_deref(), Some("X"));

        let r = SearchResult::from_value(json!({"error": null, "case_number": "CS/1"})).unwrap();
        assert_eq!(r.case_number.as_deref(), Some("CS/1"));

        let e = SearchResult::from_value(json!({"error": true})).unwrap_err();
        assert!(matches!(e, GatewayError::Server(_)));
    }
}
