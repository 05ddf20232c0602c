// src/model/geo.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;
use crate::error::{GatewayError, Result};

/// One rung of the state → district → court complex → court chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    State,
    District,
    CourtComplex,
    Court,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::State, Level::District, Level::CourtComplex, Level::Court];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Level> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn parent(self) -> Option<Level> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Every level strictly below this one, top-down.
    pub fn descendants(self) -> &'static [Level] {
        &Self::ALL[self.index() + 1..]
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::State => "State",
            Level::District => "District",
            Level::CourtComplex => "Court Complex",
            Level::Court => "Court",
        }
    }

    /// Key a listing payload may nest its array under.
    pub fn plural_key(self) -> &'static str {
        match self {
            Level::State => "states",
            Level::District => "districts",
            Level::CourtComplex => "court_complexes",
            Level::Court => "courts",
        }
    }

    /// What `GeographicalUnit::children` counts at this level, if anything.
    pub fn child_noun(self) -> Option<&'static str> {
        match self {
            Level::State => Some("districts"),
            Level::District => Some("taluks"),
            Level::CourtComplex | Level::Court => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A state, district, taluk, court complex or court.
///
/// `code` is unique within its level. `parent_code` is a plain back-reference
/// and is never resolved. `children` is the count some listings attach
/// (`total_districts`, `total_taluks`, or the length of a nested array).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawUnit")]
pub struct GeographicalUnit {
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<u32>,
}

impl GeographicalUnit {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self { code: code.into(), name: name.into(), parent_code: None, children: None }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_code = Some(parent.into());
        self
    }

    /// Combo-box text, e.g. "Delhi (11 districts)".
    pub fn label(&self, level: Level) -> String {
        match (self.children, level.child_noun()) {
            (Some(n), Some(noun)) => format!("{} ({} {})", self.name, n, noun),
            _ => self.name.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUnit {
    Full(FullUnit),
    Text(String),
    Number(serde_json::Number),
}

#[derive(Deserialize)]
struct FullUnit {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    code: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    parent_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    total_districts: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    total_taluks: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_len")]
    districts: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_len")]
    taluks: Option<u32>,
}

impl TryFrom<RawUnit> for GeographicalUnit {
    type Error = String;

    fn try_from(raw: RawUnit) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawUnit::Text(s) => Ok(Self::new(s.clone(), s)),
            RawUnit::Number(n) => Ok(Self::new(n.to_string(), n.to_string())),
            RawUnit::Full(u) => {
                let (code, name) = match (u.code, u.name) {
                    (Some(c), Some(n)) => (c, n),
                    (Some(c), None) => (c.clone(), c),
                    (None, Some(n)) => (n.clone(), n),
                    (None, None) => return Err(s!("unit has neither code nor name")),
                };
                let children = u.total_districts
                    .or(u.total_taluks)
                    .or(u.districts)
                    .or(u.taluks);
                Ok(Self { code, name, parent_code: u.parent_code, children })
            }
        }
    }
}

/// Pull the unit array out of a listing payload.
///
/// Accepts a bare array, or an object holding it under `key` or `data`.
/// An object with an `error` field is a server-side failure. Items that
/// can't be read as a unit are logged and skipped.
pub fn units_from_listing(payload: Value, key: &str) -> Result<Vec<GeographicalUnit>> {
    if let Some(err) = lenient::error_message(&payload) {
        return Err(GatewayError::Server(err));
    }
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(key).or_else(|| map.remove("data")) {
            Some(Value::Array(items)) => items,
            _ => return Err(GatewayError::Decode(format!("no `{key}` list in response"))),
        },
        other => {
            return Err(GatewayError::Decode(format!("expected a list, got {}", kind_of(&other))));
        }
    };

    let total = items.len();
    let units: Vec<GeographicalUnit> = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item) {
            Ok(unit) => Some(unit),
            Err(e) => {
                logw!("Listing: skipped `{}` item {}: {}", key, i, e);
                None
            }
        })
        .collect();
    if units.len() < total {
        logw!("Listing: kept {} of {} `{}` item(s)", units.len(), total, key);
    }
    Ok(units)
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Whole-country listings and exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    States,
    Districts,
    Taluks,
}

impl DataType {
    pub const ALL: [DataType; 3] = [DataType::States, DataType::Districts, DataType::Taluks];

    pub fn as_str(self) -> &'static str {
        match self {
            DataType::States => "states",
            DataType::Districts => "districts",
            DataType::Taluks => "taluks",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DataType::States => "States",
            DataType::Districts => "Districts",
            DataType::Taluks => "Taluks",
        }
    }

    pub fn listing_path(self) -> &'static str {
        match self {
            DataType::States => "/api/all-states",
            DataType::Districts => "/api/all-districts",
            DataType::Taluks => "/api/all-taluks",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `/api/geographical-data` document. Kept as raw JSON so it can be
/// saved back out unchanged; only the summary counters are read.
#[derive(Clone, Debug, PartialEq)]
pub struct GeographicalData {
    doc: Value,
}

impl GeographicalData {
    pub fn new(doc: Value) -> Self {
        Self { doc }
    }

    pub fn doc(&self) -> &Value {
        &self.doc
    }

    pub fn total_states(&self) -> Option<u64> {
        self.counter("total_states")
            .or_else(|| self.doc.get("states").and_then(Value::as_array).map(|a| a.len() as u64))
    }

    pub fn total_districts(&self) -> Option<u64> {
        self.counter("total_districts").or_else(|| {
            let states = self.doc.get("states")?.as_array()?;
            Some(states.iter().map(district_count).sum())
        })
    }

    fn counter(&self, key: &str) -> Option<u64> {
        match self.doc.get(key)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

fn district_count(state: &Value) -> u64 {
    state.get("total_districts")
        .and_then(Value::as_u64)
        .or_else(|| state.get("districts").and_then(Value::as_array).map(|a| a.len() as u64))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn level_chain() {
        assert_eq!(Level::State.next(), Some(Level::District));
        assert_eq!(Level::Court.next(), None);
        assert_eq!(Level::State.parent(), None);
        assert_eq!(Level::Court.parent(), Some(Level::CourtComplex));
        assert_eq!(Level::District.descendants(), &[Level::CourtComplex, Level::Court]);
        assert!(Level::Court.descendants().is_empty());
    }

    #[test]
    fn units_accept_objects_strings_and_numbers() {
        let units = units_from_listing(
            json!([
                {"code": 7, "name": "Delhi", "total_districts": "11"},
                "Saket Complex",
                42,
                {"name": "Only Name", "taluks": [1, 2, 3]}
            ]),
            "states",
        )
        .unwrap();

        assert_eq!(units[0].code, "7");
        assert_eq!(units[0].label(Level::State), "Delhi (11 districts)");
        assert_eq!(units[1], GeographicalUnit::new("Saket Complex", "Saket Complex"));
        assert_eq!(units[2].code, "42");
        assert_eq!(units[3].code, "Only Name");
        assert_eq!(units[3].children, Some(3));
    }

    #[test]
    fn listing_under_key_or_data() {
        let a = units_from_listing(json!({"districts": [{"code": "1", "name": "North"}]}), "districts").unwrap();
        let b = units_from_listing(json!({"data": [{"code": "1", "name": "North"}]}), "districts").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn listing_error_field_is_server_error() {
        let e = units_from_listing(json!({"error": "State not found"}), "districts").unwrap_err();
        assert_eq!(e.user_message(), "State not found");
    }

    #[test]
    fn unreadable_items_are_skipped() {
        let units = units_from_listing(
            json!([{"code": "1", "name": "Delhi"}, {}, null, {"code": "2", "name": "Goa"}]),
            "states",
        )
        .unwrap();
        assert_eq!(units, vec![GeographicalUnit::new("1", "Delhi"), GeographicalUnit::new("2", "Goa")]);
    }

    #[test]
    fn falsy_error_field_is_not_a_failure() {
        let units = units_from_listing(
            json!({"error": false, "states": [{"code": "1", "name": "Delhi"}]}),
            "states",
        )
        .unwrap();
        assert_eq!(units.len(), 1);

        let units = units_from_listing(json!({"error": "", "data": []}), "states").unwrap();
        assert!(units.is_empty());
    }

    #[test]
    fn listing_wrong_shape_is_decode_error() {
        let e = units_from_listing(json!("nope"), "states").unwrap_err();
        assert!(matches!(e, GatewayError::Decode(_)));
    }

    #[test]
    fn geographical_counters_fall_back_to_arrays() {
        let g = GeographicalData::new(json!({
            "states": [
                {"code": "1", "districts": [{}, {}]},
                {"code": "2", "total_districts": 5}
            ]
        }));
        assert_eq!(g.total_states(), Some(2));
        assert_eq!(g.total_districts(), Some(7));

        let g = GeographicalData::new(json!({"total_states": 36, "total_districts": "766"}));
        assert_eq!(g.total_states(), Some(36));
        assert_eq!(g.total_districts(), Some(766));
    }
}
