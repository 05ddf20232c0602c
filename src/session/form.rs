// src/session/form.rs
use crate::config::consts::{DEFAULT_CASE_NUMBER, DEFAULT_CASE_TYPE, DEFAULT_CASE_YEAR, DEFAULT_CNR};
use crate::model::{SearchMode, SearchQuery};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchForm {
    pub mode: SearchMode,
    pub cnr: String,
    pub case_type: String,
    pub case_number: String,
    pub case_year: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            mode: SearchMode::Cnr,
            cnr: s!(DEFAULT_CNR),
            case_type: s!(DEFAULT_CASE_TYPE),
            case_number: s!(DEFAULT_CASE_NUMBER),
            case_year: s!(DEFAULT_CASE_YEAR),
        }
    }
}

impl SearchForm {
    /// All fields blank; the search mode is kept.
    pub fn cleared(&self) -> Self {
        Self {
            mode: self.mode,
            cnr: s!(),
            case_type: s!(),
            case_number: s!(),
            case_year: s!(),
        }
    }

    /// The query for the current mode, or the message to show instead.
    pub fn query(&self) -> Result<SearchQuery, &'static str> {
        match self.mode {
            SearchMode::Cnr => {
                let cnr = self.cnr.trim();
                if cnr.is_empty() {
                    return Err("Please enter CNR number");
                }
                Ok(SearchQuery::Cnr { cnr: s!(cnr) })
            }
            SearchMode::Details => {
                let (t, n, y) = (self.case_type.trim(), self.case_number.trim(), self.case_year.trim());
                if t.is_empty() || n.is_empty() || y.is_empty() {
                    return Err("Please fill all case details");
                }
                Ok(SearchQuery::Details {
                    case_type: s!(t),
                    case_number: s!(n),
                    case_year: s!(y),
                })
            }
        }
    }
}
