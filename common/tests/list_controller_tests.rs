use chrono::{TimeZone, Utc};
use common::error::FetchError;
use common::list::query::list_query;
use common::list::{
    ListController, ListView, Pagination, Resolution, SortDirection, ViewState, SOURCES_LIST,
};
use common::model::page::Page;
use common::model::source::Source;

fn source(id: u64, name: &str) -> Source {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "source_type": "network",
        "hosts": ["10.0.0.1"],
        "credentials": [{"id": 1, "name": "root"}]
    }))
    .unwrap()
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
}

#[test]
fn identical_state_builds_identical_url_and_no_duplicate_fetch() {
    let mut controller: ListController<Source> =
        ListController::new("https://discovery/api/v1/sources/");
    let mut state = ViewState::new(&SOURCES_LIST);
    state.set_filter("search_by_name", "lab").unwrap();

    let same = state.clone();
    assert_eq!(list_query(&state), list_query(&same));

    let first = controller.request(&state).expect("first request is issued");
    assert_eq!(controller.request(&same), None, "in-flight URL is not re-fetched");

    controller.resolve(first.ticket, Ok(Page::new(0, vec![])), now());
    assert_eq!(controller.request(&same), None, "completed URL is not re-fetched");
}

#[test]
fn search_and_descending_sort_serialize_exactly() {
    let mut state = ViewState::new(&SOURCES_LIST);
    state.set_filter("search_by_name", "vc").unwrap();
    state.set_sort("name", SortDirection::Desc).unwrap();

    let query = list_query(&state);
    let pairs: Vec<&str> = query.split('&').collect();
    assert!(pairs.contains(&"ordering=-name"));
    assert!(pairs.contains(&"search_by_name=vc"));
    assert_eq!(pairs.iter().filter(|p| p.starts_with("ordering=")).count(), 1);
    let filter_keys: Vec<&str> = pairs
        .iter()
        .filter_map(|p| p.split_once('=').map(|(k, _)| k))
        .filter(|k| !matches!(*k, "ordering" | "page" | "page-size"))
        .collect();
    assert_eq!(filter_keys, vec!["search_by_name"]);
}

#[test]
fn two_results_render_two_rows_on_a_single_page() {
    let mut controller: ListController<Source> = ListController::new("/sources/");
    let state = ViewState::new(&SOURCES_LIST);
    assert_eq!((state.page(), state.page_size()), (1, 10));

    let request = controller.request(&state).unwrap();
    let page = Page::new(2, vec![source(1, "Peripherals"), source(2, "vcsource")]);
    assert_eq!(controller.resolve(request.ticket, Ok(page), now()), Resolution::Applied);

    match controller.view() {
        ListView::Rows { items, total, refreshing } => {
            assert_eq!(items.len(), 2);
            assert_eq!(total, 2);
            assert!(!refreshing);
        }
        other => panic!("expected rows, got {other:?}"),
    }
    let pagination = Pagination::new(state.page(), state.page_size(), controller.total());
    assert_eq!(pagination.page_count(), 1);
    assert!(!pagination.has_next());
    assert_eq!(controller.last_refreshed(), Some(now()));
}

#[test]
fn superseded_response_is_discarded() {
    let mut controller: ListController<Source> = ListController::new("/sources/");
    let mut state = ViewState::new(&SOURCES_LIST);
    let old = controller.request(&state).unwrap();

    state.toggle_sort("name").unwrap();
    let new = controller.request(&state).unwrap();
    assert_ne!(old.url, new.url);

    assert_eq!(
        controller.resolve(new.ticket, Ok(Page::new(1, vec![source(2, "zeta")])), now()),
        Resolution::Applied
    );
    assert_eq!(
        controller.resolve(old.ticket, Ok(Page::new(1, vec![source(1, "alpha")])), now()),
        Resolution::Stale
    );
    assert_eq!(controller.items()[0].name, "zeta");
}

#[test]
fn superseded_unauthorized_response_leaves_no_error() {
    let mut controller: ListController<Source> = ListController::new("/sources/");
    let mut state = ViewState::new(&SOURCES_LIST);
    let first = controller.request(&state).unwrap();
    controller.resolve(first.ticket, Ok(Page::new(1, vec![source(1, "alpha")])), now());

    state.set_page(2).unwrap();
    let superseded = controller.request(&state).unwrap();
    state.set_page(3).unwrap();
    let latest = controller.request(&state).unwrap();

    let unauthorized = FetchError::from_status(401, "expired").unwrap();
    assert_eq!(
        controller.resolve(superseded.ticket, Err(unauthorized.clone()), now()),
        Resolution::Stale
    );
    assert_eq!(controller.error(), None);
    assert!(matches!(controller.view(), ListView::Rows { refreshing: true, .. }));

    assert_eq!(
        controller.resolve(latest.ticket, Err(unauthorized), now()),
        Resolution::Applied
    );
    assert!(controller.error().is_some_and(|err| err.is_auth_failure()));
}

#[test]
fn stale_response_cannot_win_even_if_it_arrives_first() {
    let mut controller: ListController<Source> = ListController::new("/sources/");
    let mut state = ViewState::new(&SOURCES_LIST);
    let old = controller.request(&state).unwrap();
    state.set_page(2).unwrap();
    let new = controller.request(&state).unwrap();

    assert_eq!(
        controller.resolve(old.ticket, Ok(Page::new(30, vec![source(1, "page one")])), now()),
        Resolution::Stale
    );
    assert!(controller.is_loading());
    assert_eq!(controller.view(), ListView::Loading);

    controller.resolve(new.ticket, Ok(Page::new(30, vec![source(11, "page two")])), now());
    assert_eq!(controller.items()[0].name, "page two");
}

#[test]
fn rows_stay_visible_while_next_page_loads() {
    let mut controller: ListController<Source> = ListController::new("/sources/");
    let mut state = ViewState::new(&SOURCES_LIST);
    let first = controller.request(&state).unwrap();
    controller.resolve(first.ticket, Ok(Page::new(12, vec![source(1, "a")])), now());

    state.set_page(2).unwrap();
    controller.request(&state).unwrap();
    match controller.view() {
        ListView::Rows { items, refreshing, .. } => {
            assert_eq!(items[0].name, "a");
            assert!(refreshing);
        }
        other => panic!("expected previous rows, got {other:?}"),
    }
}

#[test]
fn failed_fetch_is_empty_and_distinct_from_no_data() {
    let mut controller: ListController<Source> = ListController::new("/sources/");
    let mut state = ViewState::new(&SOURCES_LIST);
    let first = controller.request(&state).unwrap();
    controller.resolve(first.ticket, Ok(Page::new(1, vec![source(1, "a")])), now());

    state.set_filter("source_type", "vcenter").unwrap();
    let failing = controller.request(&state).unwrap();
    let error = FetchError::Transport("connection refused".into());
    controller.resolve(failing.ticket, Err(error.clone()), now());

    assert!(controller.items().is_empty());
    assert_eq!(controller.error(), Some(&error));
    assert_eq!(
        controller.view(),
        ListView::Failed { error: &error, refreshing: false }
    );

    state.set_filter("source_type", "network").unwrap();
    let empty = controller.request(&state).unwrap();
    controller.resolve(empty.ticket, Ok(Page::new(0, vec![])), now());
    assert_eq!(controller.view(), ListView::Empty { refreshing: false });
}

#[test]
fn page_beyond_last_is_passed_through() {
    let mut controller: ListController<Source> = ListController::new("/sources/");
    let mut state = ViewState::new(&SOURCES_LIST);
    state.set_page(50).unwrap();
    let request = controller.request(&state).unwrap();
    assert!(request.url.contains("page=50&"));

    controller.resolve(request.ticket, Ok(Page::new(3, vec![])), now());
    assert_eq!(controller.view(), ListView::Empty { refreshing: false });
}
