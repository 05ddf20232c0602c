// tests/session_search.rs
mod common;

use common::{fixed_clock, Call, FakeGateway};
use ecourts_desk::file::Downloads;
use ecourts_desk::model::{ListingStatus, SearchMode, SearchQuery, SearchResult};
use ecourts_desk::session::{ServerStatus, Session};

fn found() -> SearchResult {
    SearchResult {
        case_number: Some("CS/123/2024".into()),
        cnr: Some("DLHI010001232024".into()),
        court: Some("District Court, Tis Hazari".into()),
        listed_tomorrow: true,
        serial_number: Some("14".into()),
        ..SearchResult::default()
    }
}

#[test]
fn cnr_search_shows_result() {
    let gw = FakeGateway::new().with_search(found());
    let downloads = Downloads::new("unused");
    let mut session = Session::with_clock(fixed_clock());

    let job = session.begin_search().expect("default CNR is valid");
    assert!(session.is_loading());
    session.dispatch(job, &gw, &downloads);

    assert!(!session.is_loading());
    assert_eq!(session.error(), None);
    let result = session.result().unwrap();
    assert_eq!(result.listing(), ListingStatus::Tomorrow);
    assert_eq!(
        gw.calls(),
        vec![Call::Search(SearchQuery::Cnr { cnr: "DLHI010001232024".into() })]
    );
}

#[test]
fn details_search_sends_trimmed_fields() {
    let gw = FakeGateway::new().with_search(found());
    let downloads = Downloads::new("unused");
    let mut session = Session::with_clock(fixed_clock());

    session.set_search_mode(SearchMode::Details);
    session.form.case_type = " CIVIL ".into();
    let job = session.begin_search().unwrap();
    session.dispatch(job, &gw, &downloads);

    assert_eq!(
        gw.calls(),
        vec![Call::Search(SearchQuery::Details {
            case_type: "CIVIL".into(),
            case_number: "123".into(),
            case_year: "2024".into(),
        })]
    );
}

#[test]
fn blank_fields_are_rejected_before_any_request() {
    let gw = FakeGateway::new();
    let mut session = Session::with_clock(fixed_clock());

    session.form.cnr = "   ".into();
    assert!(session.begin_search().is_none());
    assert_eq!(session.error(), Some("Please enter CNR number"));

    session.set_search_mode(SearchMode::Details);
    session.form.case_year.clear();
    assert!(session.begin_search().is_none());
    assert_eq!(session.error(), Some("Please fill all case details"));

    assert!(!session.is_loading());
    assert!(gw.calls().is_empty());
}

#[test]
fn gateway_failure_shows_error_and_no_result() {
    let downloads = Downloads::new("unused");
    let mut session = Session::with_clock(fixed_clock());

    // First a hit, so there is a result to lose.
    let job = session.begin_search().unwrap();
    session.dispatch(job, &FakeGateway::new().with_search(found()), &downloads);
    assert!(session.result().is_some());

    let job = session.begin_search().unwrap();
    session.dispatch(job, &FakeGateway::new(), &downloads);

    assert!(session.result().is_none());
    let err = session.error().unwrap();
    assert!(err.starts_with("Failed to fetch case data: "), "{err}");
}

#[test]
fn server_error_field_is_shown_verbatim() {
    let gw = FakeGateway::new().with_search_error("Case not found");
    let downloads = Downloads::new("unused");
    let mut session = Session::with_clock(fixed_clock());

    let job = session.begin_search().unwrap();
    session.dispatch(job, &gw, &downloads);

    assert_eq!(session.error(), Some("Case not found"));
    assert!(session.result().is_none());
}

#[test]
fn reset_clears_form_result_and_error() {
    let gw = FakeGateway::new().with_search(found());
    let downloads = Downloads::new("unused");
    let mut session = Session::with_clock(fixed_clock());
    session.set_search_mode(SearchMode::Details);

    let job = session.begin_search().unwrap();
    session.dispatch(job, &gw, &downloads);
    session.reset_form();

    assert!(session.result().is_none());
    assert_eq!(session.error(), None);
    assert!(session.form.case_type.is_empty());
    assert!(session.form.cnr.is_empty());
    assert_eq!(session.form.mode, SearchMode::Details);
}

#[test]
fn health_check_sets_server_status() {
    let downloads = Downloads::new("unused");
    let mut session = Session::with_clock(fixed_clock());
    assert_eq!(session.server_status(), ServerStatus::Unknown);

    let job = session.begin_health();
    assert_eq!(session.server_status(), ServerStatus::Checking);
    assert!(!session.is_loading(), "health checks don't block the page");

    let mut up = FakeGateway::new();
    up.healthy = true;
    session.dispatch(job, &up, &downloads);
    assert_eq!(session.server_status(), ServerStatus::Online);

    let job = session.begin_health();
    session.dispatch(job, &FakeGateway::new(), &downloads);
    assert_eq!(session.server_status(), ServerStatus::Offline);
}
