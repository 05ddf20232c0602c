// tests/session_downloads.rs
//
// Cause lists, exports and local saves end up as files with the expected
// names; empty or failed replies leave the output dir untouched.

mod common;

use std::fs;

use common::{day, fixed_clock, units, Call, FakeGateway};
use ecourts_desk::file::Downloads;
use ecourts_desk::model::{DataType, DateType, DownloadType, Level};
use ecourts_desk::session::Session;
use serde_json::{json, Value};
use tempfile::tempdir;

fn court_gateway() -> FakeGateway {
    FakeGateway::new()
        .with_options(Level::State, units(&[("7", "Delhi")]))
        .with_options(Level::District, units(&[("1", "Central")]))
        .with_options(Level::CourtComplex, units(&[("100", "Tis Hazari")]))
        .with_options(Level::Court, units(&[("5", "Court No. 5")]))
        .with_blob(br#"{"cases":[]}"#)
}

fn select_all(session: &mut Session, gw: &FakeGateway, downloads: &Downloads) {
    let job = session.load_states();
    session.dispatch(job, gw, downloads);
    for (level, code) in [
        (Level::State, "7"),
        (Level::District, "1"),
        (Level::CourtComplex, "100"),
        (Level::Court, "5"),
    ] {
        if let Some(job) = session.select(level, code) {
            session.dispatch(job, gw, downloads);
        }
    }
}

fn files_in(dir: &std::path::Path) -> Vec<String> {
    match fs::read_dir(dir) {
        Ok(rd) => {
            let mut names: Vec<String> = rd
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect();
            names.sort();
            names
        }
        Err(_) => Vec::new(),
    }
}

#[test]
fn quick_cause_list_is_saved_under_convention() {
    let tmp = tempdir().unwrap();
    let downloads = Downloads::new(tmp.path().join("out"));
    let gw = FakeGateway::new().with_blob(b"[1,2,3]");
    let mut session = Session::with_clock(fixed_clock());

    let job = session.begin_quick_download(DateType::Tomorrow).unwrap();
    session.dispatch(job, &gw, &downloads);

    let path = downloads.dir().join("cause_list_tomorrow_2026-10-18.json");
    assert_eq!(fs::read(&path).unwrap(), b"[1,2,3]");
    assert_eq!(session.notice(), Some(format!("Saved {}", path.display()).as_str()));
    assert_eq!(gw.calls(), vec![Call::QuickCauseList(DateType::Tomorrow)]);
}

#[test]
fn empty_blob_saves_nothing() {
    let tmp = tempdir().unwrap();
    let downloads = Downloads::new(tmp.path());
    let gw = FakeGateway::new().with_blob(b"");
    let mut session = Session::with_clock(fixed_clock());

    let job = session.begin_quick_download(DateType::Today).unwrap();
    session.dispatch(job, &gw, &downloads);

    assert_eq!(session.error(), Some("Failed to download cause list: Empty response from server"));
    assert_eq!(session.notice(), None);
    assert!(files_in(tmp.path()).is_empty());
}

#[test]
fn court_cause_list_is_dated_by_chosen_date() {
    let tmp = tempdir().unwrap();
    let downloads = Downloads::new(tmp.path());
    let gw = court_gateway();
    let mut session = Session::with_clock(fixed_clock());

    select_all(&mut session, &gw, &downloads);
    assert!(session.set_date_text("2026-10-21"));

    let job = session.begin_court_download(DownloadType::Single).unwrap();
    session.dispatch(job, &gw, &downloads);

    assert_eq!(files_in(tmp.path()), vec!["cause_list_single_2026-10-21.json"]);
    let Some(Call::CourtCauseList(req)) = gw.calls().last().cloned() else {
        panic!("no cause-list call");
    };
    assert_eq!(req.court_code.as_deref(), Some("5"));
    assert_eq!(req.date, day(2026, 10, 21));
    assert_eq!(req.download_type, DownloadType::Single);
}

#[test]
fn refused_date_does_not_reach_the_request() {
    let tmp = tempdir().unwrap();
    let downloads = Downloads::new(tmp.path());
    let gw = court_gateway();
    let mut session = Session::with_clock(fixed_clock());

    select_all(&mut session, &gw, &downloads);
    assert!(session.set_date_text("2026-10-21"));
    assert!(!session.set_date_text("2026-10-01"));

    let job = session.begin_court_download(DownloadType::Complex).unwrap();
    session.dispatch(job, &gw, &downloads);

    assert_eq!(files_in(tmp.path()), vec!["cause_list_complex_2026-10-21.json"]);
    let Some(Call::CourtCauseList(req)) = gw.calls().last().cloned() else {
        panic!("no cause-list call");
    };
    assert_eq!(req.date, day(2026, 10, 21));
}

#[test]
fn all_courts_request_omits_court_code() {
    let tmp = tempdir().unwrap();
    let downloads = Downloads::new(tmp.path());
    let gw = court_gateway();
    let mut session = Session::with_clock(fixed_clock());

    select_all(&mut session, &gw, &downloads);
    session.set_today();
    let job = session.begin_court_download(DownloadType::All).unwrap();
    session.dispatch(job, &gw, &downloads);

    assert_eq!(files_in(tmp.path()), vec!["cause_list_all_2026-10-18.json"]);
    let Some(Call::CourtCauseList(req)) = gw.calls().last().cloned() else {
        panic!("no cause-list call");
    };
    assert_eq!(req.court_code, None);
    assert_eq!(req.court_complex_code, "100");
}

#[test]
fn export_failure_names_data_type() {
    let tmp = tempdir().unwrap();
    let downloads = Downloads::new(tmp.path());
    let mut session = Session::with_clock(fixed_clock());

    let job = session.begin_export(DataType::Taluks).unwrap();
    session.dispatch(job, &FakeGateway::new(), &downloads);

    let err = session.error().unwrap();
    assert!(err.starts_with("Failed to export taluks data: "), "{err}");
    assert!(files_in(tmp.path()).is_empty());

    let job = session.begin_export(DataType::Taluks).unwrap();
    session.dispatch(job, &FakeGateway::new().with_blob(b"{}"), &downloads);
    assert_eq!(session.error(), None);
    assert_eq!(files_in(tmp.path()), vec!["taluks_data_2026-10-18.json"]);
}

#[test]
fn selection_snapshot_holds_full_units() {
    let tmp = tempdir().unwrap();
    let downloads = Downloads::new(tmp.path());
    let gw = court_gateway();
    let mut session = Session::with_clock(fixed_clock());

    select_all(&mut session, &gw, &downloads);
    let path = session.save_selection(&downloads).unwrap();
    assert_eq!(path.file_name().unwrap(), "court_selection_7_1_2026-10-18.json");

    let doc: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(doc["state"]["name"], "Delhi");
    assert_eq!(doc["court_complex"]["code"], "100");
    assert_eq!(doc["court"]["name"], "Court No. 5");
    assert!(doc.get("date").is_none());
    assert!(doc["timestamp"].as_str().unwrap().starts_with("2026-10-18T12:00:00"));
}

#[test]
fn snapshot_needs_state_and_district() {
    let tmp = tempdir().unwrap();
    let downloads = Downloads::new(tmp.path());
    let mut session = Session::with_clock(fixed_clock());

    assert!(session.save_selection(&downloads).is_none());
    assert!(files_in(tmp.path()).is_empty());
}

#[test]
fn geographical_data_loads_and_saves() {
    let tmp = tempdir().unwrap();
    let downloads = Downloads::new(tmp.path());
    let gw = FakeGateway::new().with_geo(json!({ "total_states": 36, "total_districts": 766 }));
    let mut session = Session::with_clock(fixed_clock());

    assert!(session.save_geographical(&downloads).is_none(), "nothing loaded yet");

    let job = session.begin_geographical_data().unwrap();
    session.dispatch(job, &gw, &downloads);

    let stats = session.header_stats().unwrap();
    assert_eq!((stats.states, stats.districts), (36, 766));

    let path = session.save_geographical(&downloads).unwrap();
    assert_eq!(path.file_name().unwrap(), "geographical_data_2026-10-18.json");
    let doc: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(doc["total_states"], 36);
}

#[test]
fn busy_session_refuses_new_downloads() {
    let mut session = Session::with_clock(fixed_clock());
    let _job = session.begin_quick_download(DateType::Today).unwrap();

    assert!(session.begin_quick_download(DateType::Tomorrow).is_none());
    assert!(session.begin_export(DataType::States).is_none());
    assert!(session.begin_listing(DataType::States).is_none());
}
