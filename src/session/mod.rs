// src/session/mod.rs
//
// Headless presentation model. Holds everything the screen shows; the GUI
// draws from it and calls back into it, the CLI and tests drive it directly.
//
// Actions come in two halves: `begin_*` validates, flips `loading` and returns
// a Job; `apply` takes the Job's Outcome. `dispatch` runs both in place.
// Only the UI thread touches a Session.

mod form;
mod job;
mod view;

pub use form::SearchForm;
pub use job::{Job, Outcome, SaveTarget};
pub use view::{ServerStatus, View};

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::GatewayError;
use crate::file::{self, Downloads, SelectionSnapshot};
use crate::gateway::Gateway;
use crate::model::{
    Ancestors, DataType, DateType, DownloadType, GeographicalData, GeographicalUnit, Level,
    SearchMode, SearchResult,
};
use crate::selection::{Cascade, DownloadAction, FetchRequest, Selection};

/// Source of "now". Fixed clocks keep file names predictable in tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => t,
        }
    }

    pub fn today(self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Counts for the header badges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeaderStats {
    pub states: u64,
    pub districts: u64,
    pub courts: u64,
}

#[derive(Debug, Default)]
pub struct Session {
    pub view: View,
    pub form: SearchForm,

    result: Option<SearchResult>,
    error: Option<String>,
    notice: Option<String>,
    loading: bool,
    server: ServerStatus,

    selection: Selection,
    cascade: Cascade,

    geographical: Option<GeographicalData>,
    listing: Option<(DataType, Vec<GeographicalUnit>)>,

    clock: Clock,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { clock, ..Self::default() }
    }

    /* ---------- read side ---------- */

    pub fn result(&self) -> Option<&SearchResult> { self.result.as_ref() }
    pub fn error(&self) -> Option<&str> { self.error.as_deref() }
    pub fn notice(&self) -> Option<&str> { self.notice.as_deref() }
    pub fn is_loading(&self) -> bool { self.loading }
    pub fn server_status(&self) -> ServerStatus { self.server }
    pub fn selection(&self) -> &Selection { &self.selection }
    pub fn cascade(&self) -> &Cascade { &self.cascade }
    pub fn options(&self, level: Level) -> &[GeographicalUnit] { self.cascade.options(level) }
    pub fn geographical(&self) -> Option<&GeographicalData> { self.geographical.as_ref() }
    pub fn today(&self) -> NaiveDate { self.clock.today() }

    pub fn listing(&self) -> Option<(DataType, &[GeographicalUnit])> {
        self.listing.as_ref().map(|(k, units)| (*k, units.as_slice()))
    }

    pub fn is_enabled(&self, action: DownloadAction) -> bool {
        action.is_enabled(&self.selection, self.loading)
    }

    /// Geographical totals when loaded, otherwise what the cascade holds.
    /// None until either has anything.
    pub fn header_stats(&self) -> Option<HeaderStats> {
        let states_listed = self.cascade.options(Level::State).len() as u64;
        let geo = self.geographical.as_ref();
        if geo.is_none() && states_listed == 0 {
            return None;
        }
        Some(HeaderStats {
            states: geo.and_then(GeographicalData::total_states).unwrap_or(states_listed),
            districts: geo
                .and_then(GeographicalData::total_districts)
                .unwrap_or(self.cascade.options(Level::District).len() as u64),
            courts: self.cascade.options(Level::Court).len() as u64,
        })
    }

    /* ---------- messages ---------- */

    pub fn dismiss_error(&mut self) { self.error = None; }
    pub fn dismiss_notice(&mut self) { self.notice = None; }

    fn fail(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        loge!("UI: {}", msg);
        self.notice = None;
        self.error = Some(msg);
    }

    fn start(&mut self) {
        self.loading = true;
        self.error = None;
        self.notice = None;
    }

    /* ---------- case search ---------- */

    pub fn set_search_mode(&mut self, mode: SearchMode) {
        self.form.mode = mode;
    }

    /// Clear the form, the result and the error.
    pub fn reset_form(&mut self) {
        self.form = self.form.cleared();
        self.result = None;
        self.error = None;
    }

    pub fn begin_search(&mut self) -> Option<Job> {
        self.error = None;
        self.result = None;
        match self.form.query() {
            Ok(query) => {
                self.start();
                logf!("Search: Begin {:?}", self.form.mode);
                Some(Job::Search(query))
            }
            Err(msg) => {
                self.fail(msg);
                None
            }
        }
    }

    /* ---------- health ---------- */

    pub fn begin_health(&mut self) -> Job {
        self.server = ServerStatus::Checking;
        Job::Health
    }

    /* ---------- selection cascade ---------- */

    /// Fetch the top-level (state) options.
    pub fn load_states(&mut self) -> Job {
        self.start();
        Job::FetchOptions(FetchRequest { level: Level::State, ancestors: Ancestors::default() })
    }

    /// Choose `code` at `level` (blank = unset). Lower selections and their
    /// option lists are emptied; the returned Job fetches the next level.
    pub fn select(&mut self, level: Level, code: &str) -> Option<Job> {
        if let Some(parent) = level.parent() {
            if !self.selection.is_set(parent) {
                logd!("UI: {} change ignored, no {} chosen", level, parent);
                return None;
            }
        }
        let (next, fetch) = self.selection.set(level, code);
        self.selection = next;
        self.cascade.clear_below(level);
        logf!("UI: {} → {:?}", level, self.selection.code(level));

        fetch.map(|request| {
            self.start();
            Job::FetchOptions(request)
        })
    }

    /// Set the cause-list date. Past dates are refused.
    pub fn set_date(&mut self, date: NaiveDate) -> bool {
        if date < self.today() {
            self.fail("Cause list date must be today or later");
            return false;
        }
        self.selection = self.selection.with_date(date);
        true
    }

    /// Parse `YYYY-MM-DD`; blank clears the date.
    pub fn set_date_text(&mut self, text: &str) -> bool {
        let t = text.trim();
        if t.is_empty() {
            self.selection = self.selection.without_date();
            return true;
        }
        match NaiveDate::parse_from_str(t, "%Y-%m-%d") {
            Ok(date) => self.set_date(date),
            Err(_) => {
                self.fail(format!("Invalid date '{t}', use YYYY-MM-DD"));
                false
            }
        }
    }

    pub fn set_relative_date(&mut self, date_type: DateType) {
        let date = date_type.resolve(self.today());
        self.set_date(date);
    }

    /// The chosen date as `YYYY-MM-DD`, blank when unset.
    pub fn date_text(&self) -> String {
        self.selection.date().map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
    }

    pub fn set_today(&mut self) { self.set_relative_date(DateType::Today); }
    pub fn set_tomorrow(&mut self) { self.set_relative_date(DateType::Tomorrow); }

    /* ---------- downloads ---------- */

    pub fn begin_court_download(&mut self, kind: DownloadType) -> Option<Job> {
        if !self.is_enabled(DownloadAction::CourtCauseList(kind)) {
            logd!("Download: {} clicked while disabled", kind);
            return None;
        }
        let request = self.selection.cause_list_request(kind)?;
        let file_name = file::court_cause_list_name(kind, request.date);
        self.start();
        logf!("Download: Begin {} cause list for {}", kind, request.date);
        Some(Job::CourtCauseList { request, file_name })
    }

    pub fn begin_quick_download(&mut self, date_type: DateType) -> Option<Job> {
        if self.loading {
            return None;
        }
        let file_name = file::quick_cause_list_name(date_type, self.today());
        self.start();
        logf!("Download: Begin quick cause list {}", date_type);
        Some(Job::QuickCauseList { date_type, file_name })
    }

    pub fn begin_export(&mut self, data_type: DataType) -> Option<Job> {
        if self.loading {
            return None;
        }
        let file_name = file::export_name(data_type, self.today());
        self.start();
        logf!("Export: Begin {}", data_type);
        Some(Job::Export { data_type, file_name })
    }

    pub fn begin_listing(&mut self, kind: DataType) -> Option<Job> {
        if self.loading {
            return None;
        }
        self.start();
        Some(Job::Listing(kind))
    }

    pub fn begin_geographical_data(&mut self) -> Option<Job> {
        if self.loading {
            return None;
        }
        self.start();
        Some(Job::GeographicalData)
    }

    /// Save the current selection locally. Needs a state and a district.
    pub fn save_selection(&mut self, downloads: &Downloads) -> Option<PathBuf> {
        if !self.is_enabled(DownloadAction::SelectionSnapshot) {
            return None;
        }
        let (state, district) = (
            self.selection.code(Level::State)?,
            self.selection.code(Level::District)?,
        );
        let name = file::selection_name(state, district, self.today());
        let snapshot = SelectionSnapshot::capture(&self.selection, &self.cascade, self.clock.now());
        self.finish_local_save(downloads.save_json(&name, &snapshot), "selection")
    }

    /// Save the loaded geographical document locally.
    pub fn save_geographical(&mut self, downloads: &Downloads) -> Option<PathBuf> {
        let doc = self.geographical.as_ref()?.doc().clone();
        let name = file::geographical_name(self.today());
        self.finish_local_save(downloads.save_json(&name, &doc), "geographical data")
    }

    fn finish_local_save(&mut self, res: crate::error::Result<PathBuf>, what: &str) -> Option<PathBuf> {
        match res {
            Ok(path) => {
                self.error = None;
                self.notice = Some(format!("Saved {}", path.display()));
                Some(path)
            }
            Err(e) => {
                self.fail(format!("Failed to save {what}: {}", e.user_message()));
                None
            }
        }
    }

    /* ---------- completion ---------- */

    /// Take a finished Job's result. Clears the loading flag (health checks
    /// never set it).
    pub fn apply(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Health(res) => {
                self.server = match res {
                    Ok(()) => ServerStatus::Online,
                    Err(e) => {
                        logw!("Health: {}", e);
                        ServerStatus::Offline
                    }
                };
                logf!("Health: {:?}", self.server);
            }

            Outcome::Options { request, result } => {
                self.loading = false;
                let level = request.level;
                let current = self.selection.ancestors_for(level);
                let stale = request.ancestors != current;
                match result {
                    Ok(units) => {
                        if stale {
                            // No cancellation: late replies still land.
                            logw!("Options: {} reply for {:?} arrived after selection moved to {:?}",
                                level, request.ancestors, current);
                        }
                        logf!("Options: {} → {} item(s)", level, units.len());
                        self.cascade.replace(level, units);
                    }
                    Err(e) => {
                        let what = level.plural_key().replace('_', " ");
                        self.fail(format!("Failed to load {what}: {}", e.user_message()));
                    }
                }
            }

            Outcome::Listing { kind, result } => {
                self.loading = false;
                match result {
                    Ok(units) => {
                        logf!("Listing: {} → {} item(s)", kind, units.len());
                        self.listing = Some((kind, units));
                    }
                    Err(e) => self.fail(format!("Failed to load {kind}: {}", e.user_message())),
                }
            }

            Outcome::GeographicalData(result) => {
                self.loading = false;
                match result {
                    Ok(data) => self.geographical = Some(data),
                    Err(e) => self.fail(format!("Failed to load geographical data: {}", e.user_message())),
                }
            }

            Outcome::Search(result) => {
                self.loading = false;
                match result {
                    Ok(r) => {
                        logf!("Search: OK case={:?}", r.case_number);
                        self.result = Some(r);
                    }
                    Err(GatewayError::Server(msg)) => {
                        self.result = None;
                        self.fail(msg);
                    }
                    Err(e) => {
                        self.result = None;
                        self.fail(format!("Failed to fetch case data: {}", e.user_message()));
                    }
                }
            }

            Outcome::Saved { target, result } => {
                self.loading = false;
                match result {
                    Ok(path) => {
                        self.error = None;
                        self.notice = Some(format!("Saved {}", path.display()));
                    }
                    Err(e) => {
                        let msg = match target {
                            SaveTarget::CauseList => format!("Failed to download cause list: {}", e.user_message()),
                            SaveTarget::Export(_) => format!("Failed to export {target}: {}", e.user_message()),
                        };
                        self.fail(msg);
                    }
                }
            }
        }
    }

    /// Run `job` to completion on this thread and apply it.
    pub fn dispatch(&mut self, job: Job, gateway: &dyn Gateway, downloads: &Downloads) {
        let outcome = job.run(gateway, downloads);
        self.apply(outcome);
    }
}
