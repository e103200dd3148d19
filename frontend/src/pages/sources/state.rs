//! Component state for the sources list.
//!
//! Holds the list view state (also mirrored into the URL), the remote list
//! controller, the row selection, and the two mutually exclusive overlays:
//! the credentials of a source (taken from the row itself) and the
//! connection breakdown of a source (fetched each time it opens).

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;

use common::detail::DetailOverlay;
use common::list::{ListController, ViewState, SOURCES_LIST};
use common::model::connection::ConnectionBuckets;
use common::model::source::{Source, SourceType};
use common::selection::Selection;

use crate::api::ApiClient;
use crate::helpers::now;
use crate::url_state::current_query;

pub struct SourcesListView {
    /// Sort, filters and page; restored from and written back to the URL.
    pub view_state: ViewState,

    /// Outstanding and completed fetches of `GET /sources/`.
    pub list: ListController<Source>,

    /// Ids of the rows checked for bulk actions.
    pub selection: Selection<u64>,

    /// Source whose credentials overlay is open.
    pub credentials_for: Option<Source>,

    /// Connection overlay, keyed by the source it was opened for.
    pub connections: DetailOverlay<Source, ConnectionBuckets>,

    /// Source type of the open add-source modal.
    pub add_source: Option<SourceType>,

    /// Clock used for relative times; advanced by `ticker`.
    pub now: DateTime<Utc>,

    /// Keeps "time ago" labels fresh while the page is mounted.
    pub ticker: Option<Interval>,
}

impl SourcesListView {
    pub fn new(api: &ApiClient) -> Self {
        Self {
            view_state: ViewState::from_url_params(&SOURCES_LIST, &current_query()),
            list: ListController::new(api.endpoints().sources()),
            selection: Selection::new(),
            credentials_for: None,
            connections: DetailOverlay::new(),
            add_source: None,
            now: now(),
            ticker: None,
        }
    }

    /// Row of the current page with `id`.
    pub fn source(&self, id: u64) -> Option<&Source> {
        self.list.items().iter().find(|s| s.id == id)
    }
}
