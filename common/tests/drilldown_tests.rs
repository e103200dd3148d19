use common::detail::{DetailOverlay, DetailState};
use common::error::FetchError;
use common::model::connection::{Bucket, ConnectionBuckets, ConnectionDetailItem};
use common::selection::Selection;

fn item(name: &str, status: &str) -> ConnectionDetailItem {
    ConnectionDetailItem {
        id: None,
        name: name.to_string(),
        status: status.to_string(),
        source: None,
    }
}

#[test]
fn toggling_selection_is_self_inverse() {
    let mut selection: Selection<u64> = Selection::new();
    assert!(selection.toggle(7));
    assert!(selection.contains(&7));
    assert!(!selection.toggle(7));
    assert!(!selection.contains(&7));
    assert!(selection.is_empty());
}

#[test]
fn selection_is_keyed_by_identifier_not_position() {
    let mut selection: Selection<u64> = Selection::new();
    selection.toggle(3);
    selection.toggle(1);
    selection.toggle(3);
    assert_eq!(selection.iter().copied().collect::<Vec<_>>(), vec![1]);
}

#[test]
fn connection_classification_is_total_and_disjoint() {
    let items = vec![
        item("a", "success"),
        item("b", "failed"),
        item("c", "unreachable"),
        item("d", "success"),
        item("e", "something-new"),
        item("f", ""),
    ];
    let buckets = ConnectionBuckets::partition(items.clone());

    assert_eq!(buckets.len(), items.len());
    for it in &items {
        let holders = [Bucket::Failed, Bucket::UnreachableOrOther, Bucket::Successful]
            .into_iter()
            .filter(|b| buckets.get(*b).contains(it))
            .count();
        assert_eq!(holders, 1, "{} must be in exactly one bucket", it.name);
    }

    let names = |b: Bucket| buckets.get(b).iter().map(|i| i.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names(Bucket::Failed), vec!["b"]);
    assert_eq!(names(Bucket::UnreachableOrOther), vec!["c", "e", "f"]);
    assert_eq!(names(Bucket::Successful), vec!["a", "d"]);
}

#[test]
fn reopening_overlay_fetches_again() {
    let mut overlay: DetailOverlay<u64, ConnectionBuckets> = DetailOverlay::new();
    let mut fetches = Vec::new();

    let first = overlay.open(5);
    fetches.push(first.clone());
    assert!(overlay.resolve(first.ticket, Ok(ConnectionBuckets::partition(vec![item("a", "success")]))));
    assert!(overlay.data().is_some());

    overlay.close();
    assert_eq!(overlay.state(), &DetailState::Closed);
    assert!(overlay.data().is_none());

    let second = overlay.open(5);
    fetches.push(second.clone());
    assert!(overlay.data().is_none(), "nothing is reused from the previous open");
    assert_eq!(fetches.len(), 2);
    assert_ne!(fetches[0].ticket, fetches[1].ticket);
}

#[test]
fn response_after_close_is_dropped() {
    let mut overlay: DetailOverlay<u64, ConnectionBuckets> = DetailOverlay::new();
    let request = overlay.open(1);
    overlay.close();
    assert!(!overlay.resolve(request.ticket, Ok(ConnectionBuckets::default())));
    assert!(!overlay.is_open());
}

#[test]
fn failure_from_previous_open_does_not_reach_reopened_overlay() {
    let mut overlay: DetailOverlay<u64, ConnectionBuckets> = DetailOverlay::new();
    let old = overlay.open(4);
    let current = overlay.open(4);

    let unauthorized = FetchError::from_status(403, "").unwrap();
    assert!(!overlay.resolve(old.ticket, Err(unauthorized)));
    assert_eq!(overlay.state(), &DetailState::Loading { key: 4 });
    assert!(overlay.resolve(current.ticket, Ok(ConnectionBuckets::default())));
}
