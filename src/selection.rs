// src/selection.rs
//
// The state → district → court complex → court chain, plus a cause-list date.
//
// `Selection` is a value: every transition returns a new one. Setting level N
// clears N+1..=Court unconditionally, so a lower level is never set while its
// parent is empty. The date is independent of the chain.

use chrono::NaiveDate;

use crate::model::{Ancestors, CauseListRequest, DownloadType, GeographicalUnit, Level};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    state: Option<String>,
    district: Option<String>,
    court_complex: Option<String>,
    court: Option<String>,
    date: Option<NaiveDate>,
}

/// How far down the chain the user has got.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Empty,
    StateChosen,
    DistrictChosen,
    ComplexChosen,
    CourtChosen,
}

/// Options needed for `level`, scoped to the ancestors chosen at the time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub level: Level,
    pub ancestors: Ancestors,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(&self, level: Level) -> Option<&str> {
        match level {
            Level::State => self.state.as_deref(),
            Level::District => self.district.as_deref(),
            Level::CourtComplex => self.court_complex.as_deref(),
            Level::Court => self.court.as_deref(),
        }
    }

    pub fn is_set(&self, level: Level) -> bool {
        self.code(level).is_some()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    fn slot(&mut self, level: Level) -> &mut Option<String> {
        match level {
            Level::State => &mut self.state,
            Level::District => &mut self.district,
            Level::CourtComplex => &mut self.court_complex,
            Level::Court => &mut self.court,
        }
    }

    /// Choose `code` at `level` (blank = unset).
    ///
    /// Everything below `level` is cleared. The returned request asks for the
    /// next level's options and is present only when a value was chosen and a
    /// next level exists. Choosing under an unset parent is refused and
    /// returns an unchanged copy.
    pub fn set(&self, level: Level, code: &str) -> (Selection, Option<FetchRequest>) {
        if let Some(parent) = level.parent() {
            if !self.is_set(parent) {
                logd!("Selection: {} ignored, {} not chosen", level, parent);
                return (self.clone(), None);
            }
        }

        let code = code.trim();
        let mut next = self.clone();
        *next.slot(level) = if code.is_empty() { None } else { Some(s!(code)) };
        for &below in level.descendants() {
            *next.slot(below) = None;
        }

        let fetch = match (next.is_set(level), level.next()) {
            (true, Some(child)) => Some(FetchRequest { level: child, ancestors: next.ancestors_for(child) }),
            _ => None,
        };
        (next, fetch)
    }

    pub fn with_state(&self, code: &str) -> Selection {
        self.set(Level::State, code).0
    }

    pub fn with_district(&self, code: &str) -> Selection {
        self.set(Level::District, code).0
    }

    pub fn with_court_complex(&self, code: &str) -> Selection {
        self.set(Level::CourtComplex, code).0
    }

    pub fn with_court(&self, code: &str) -> Selection {
        self.set(Level::Court, code).0
    }

    pub fn with_date(&self, date: NaiveDate) -> Selection {
        Selection { date: Some(date), ..self.clone() }
    }

    pub fn without_date(&self) -> Selection {
        Selection { date: None, ..self.clone() }
    }

    pub fn stage(&self) -> Stage {
        match (&self.state, &self.district, &self.court_complex, &self.court) {
            (None, ..) => Stage::Empty,
            (Some(_), None, ..) => Stage::StateChosen,
            (Some(_), Some(_), None, _) => Stage::DistrictChosen,
            (Some(_), Some(_), Some(_), None) => Stage::ComplexChosen,
            (Some(_), Some(_), Some(_), Some(_)) => Stage::CourtChosen,
        }
    }

    /// A court and a date: everything a content request can ask for.
    pub fn is_complete(&self) -> bool {
        self.stage() == Stage::CourtChosen && self.date.is_some()
    }

    /// No level is set under an unset parent.
    pub fn is_consistent(&self) -> bool {
        Level::ALL.windows(2).all(|w| self.is_set(w[0]) || !self.is_set(w[1]))
    }

    /// Chosen codes of every level above `level`.
    pub fn ancestors_for(&self, level: Level) -> Ancestors {
        let pick = |l: Level| if l < level { self.code(l).map(String::from) } else { None };
        Ancestors {
            state_code: pick(Level::State),
            district_code: pick(Level::District),
            court_complex_code: pick(Level::CourtComplex),
        }
    }

    /// Request body for a court-level download, if the selection allows it.
    pub fn cause_list_request(&self, kind: DownloadType) -> Option<CauseListRequest> {
        if !self.is_set(kind.required_level()) {
            return None;
        }
        Some(CauseListRequest {
            state_code: self.state.clone()?,
            district_code: self.district.clone()?,
            court_complex_code: self.court_complex.clone()?,
            date: self.date?,
            download_type: kind,
            court_code: match kind {
                DownloadType::Single => self.court.clone(),
                DownloadType::All | DownloadType::Complex => None,
            },
        })
    }
}

/// Option lists for every level. Follows the same reset rule as `Selection`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cascade {
    options: [Vec<GeographicalUnit>; 4],
}

impl Cascade {
    pub fn options(&self, level: Level) -> &[GeographicalUnit] {
        &self.options[level.index()]
    }

    pub fn replace(&mut self, level: Level, units: Vec<GeographicalUnit>) {
        self.options[level.index()] = units;
    }

    /// Empty every list strictly below `level`.
    pub fn clear_below(&mut self, level: Level) {
        for &below in level.descendants() {
            self.options[below.index()].clear();
        }
    }

    pub fn find(&self, level: Level, code: &str) -> Option<&GeographicalUnit> {
        self.options(level).iter().find(|u| u.code == code)
    }

    /// Unit chosen at `level` in `sel`, when it's in the current list.
    pub fn chosen<'a>(&'a self, sel: &Selection, level: Level) -> Option<&'a GeographicalUnit> {
        sel.code(level).and_then(|c| self.find(level, c))
    }
}

/// Buttons on the Court Data page that depend on the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadAction {
    CourtCauseList(DownloadType),
    SelectionSnapshot,
}

impl DownloadAction {
    pub fn label(self) -> &'static str {
        match self {
            DownloadAction::CourtCauseList(DownloadType::Single) => "Download Single Court Cause List (JSON)",
            DownloadAction::CourtCauseList(DownloadType::All) => "Download All Courts Cause List (JSON)",
            DownloadAction::CourtCauseList(DownloadType::Complex) => "Download Court Complex Data (JSON)",
            DownloadAction::SelectionSnapshot => "Download Selection Data (JSON)",
        }
    }

    /// Disabled whenever a required field is unset. Server downloads are also
    /// disabled while a request is in flight; the snapshot is local.
    pub fn is_enabled(self, sel: &Selection, loading: bool) -> bool {
        match self {
            DownloadAction::CourtCauseList(kind) => {
                !loading && sel.is_set(kind.required_level()) && sel.date().is_some()
            }
            DownloadAction::SelectionSnapshot => sel.is_set(Level::State) && sel.is_set(Level::District),
        }
    }
}
