//! Request bookkeeping for a remote list.
//!
//! The controller never performs IO. The view asks it for a [`ListRequest`]
//! whenever the view state may have changed, performs the fetch, and hands
//! the result back through [`ListController::resolve`] together with the
//! ticket it was issued. Only the ticket of the most recently issued request
//! is accepted; anything older is discarded, so a slow response for an old
//! sort or page can never overwrite the rows of the current one.

use chrono::{DateTime, Utc};

use super::query::list_url;
use super::view_state::ViewState;
use crate::error::FetchError;
use crate::model::page::Page;

/// Identity of one issued list request. Tickets increase monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// A fetch the caller has to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub ticket: Ticket,
    pub url: String,
}

/// What happened to a response handed to [`ListController::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

/// What the table should render.
#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    /// Nothing has completed yet.
    Loading,
    /// The last completed fetch returned rows. `refreshing` is set while a
    /// newer fetch is outstanding; the rows stay visible until it resolves.
    Rows {
        items: &'a [T],
        total: u64,
        refreshing: bool,
    },
    /// The last completed fetch succeeded with no rows.
    Empty { refreshing: bool },
    /// The last completed fetch failed.
    Failed {
        error: &'a FetchError,
        refreshing: bool,
    },
}

#[derive(Debug)]
pub struct ListController<T> {
    endpoint: String,
    issued: u64,
    /// Ticket and URL of the most recently issued request.
    latest: Option<ListRequest>,
    in_flight: bool,
    completed: Option<Result<Page<T>, FetchError>>,
    last_refreshed: Option<DateTime<Utc>>,
}

impl<T> ListController<T> {
    /// `endpoint` is the absolute collection URL, e.g. `.../api/v1/sources/`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            issued: 0,
            latest: None,
            in_flight: false,
            completed: None,
            last_refreshed: None,
        }
    }

    /// Issues a request for `state` unless its URL equals the one of the
    /// latest issued request (in flight or completed).
    pub fn request(&mut self, state: &ViewState) -> Option<ListRequest> {
        let url = list_url(&self.endpoint, state);
        if self.latest.as_ref().is_some_and(|latest| latest.url == url) {
            return None;
        }
        Some(self.issue(url))
    }

    /// Forces a new request for the current URL, e.g. from a refresh button.
    /// Returns `None` when nothing was ever requested.
    pub fn refresh(&mut self) -> Option<ListRequest> {
        let url = self.latest.as_ref()?.url.clone();
        Some(self.issue(url))
    }

    fn issue(&mut self, url: String) -> ListRequest {
        self.issued += 1;
        let request = ListRequest {
            ticket: Ticket(self.issued),
            url,
        };
        self.latest = Some(request.clone());
        self.in_flight = true;
        request
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// A successful page replaces the rows and advances the refresh timestamp;
    /// a failure replaces them with the error. Responses to superseded tickets
    /// leave the controller untouched.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: Result<Page<T>, FetchError>,
        now: DateTime<Utc>,
    ) -> Resolution {
        let current = self.latest.as_ref().map(|latest| latest.ticket);
        if !self.in_flight || current != Some(ticket) {
            return Resolution::Stale;
        }
        self.in_flight = false;
        if result.is_ok() {
            self.last_refreshed = Some(match self.last_refreshed {
                Some(previous) if previous > now => previous,
                _ => now,
            });
        }
        self.completed = Some(result);
        Resolution::Applied
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Time of the last successful fetch. Never moves backwards.
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    /// Rows of the last completed fetch, empty unless it succeeded.
    pub fn items(&self) -> &[T] {
        match &self.completed {
            Some(Ok(page)) => &page.results,
            _ => &[],
        }
    }

    pub fn total(&self) -> u64 {
        match &self.completed {
            Some(Ok(page)) => page.total(),
            _ => 0,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.completed.as_ref().and_then(|c| c.as_ref().err())
    }

    pub fn view(&self) -> ListView<'_, T> {
        let refreshing = self.in_flight;
        match &self.completed {
            None => ListView::Loading,
            Some(Err(error)) => ListView::Failed { error, refreshing },
            Some(Ok(page)) if page.results.is_empty() => ListView::Empty { refreshing },
            Some(Ok(page)) => ListView::Rows {
                items: &page.results,
                total: page.total(),
                refreshing,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::schema::SOURCES_LIST;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn refresh_before_first_request_is_noop() {
        let mut controller: ListController<u32> = ListController::new("/sources/");
        assert_eq!(controller.refresh(), None);
        assert_eq!(controller.view(), ListView::Loading);
    }

    #[test]
    fn refresh_reissues_same_url() {
        let mut controller: ListController<u32> = ListController::new("/sources/");
        let state = ViewState::new(&SOURCES_LIST);
        let first = controller.request(&state).unwrap();
        controller.resolve(first.ticket, Ok(Page::new(1, vec![7])), at(10));

        let again = controller.refresh().unwrap();
        assert_eq!(again.url, first.url);
        assert!(again.ticket > first.ticket);
        assert!(controller.is_loading());
    }

    #[test]
    fn response_after_resolution_is_stale() {
        let mut controller: ListController<u32> = ListController::new("/sources/");
        let state = ViewState::new(&SOURCES_LIST);
        let request = controller.request(&state).unwrap();
        assert_eq!(
            controller.resolve(request.ticket, Ok(Page::new(1, vec![1])), at(1)),
            Resolution::Applied
        );
        assert_eq!(
            controller.resolve(request.ticket, Ok(Page::new(1, vec![2])), at(2)),
            Resolution::Stale
        );
        assert_eq!(controller.items(), &[1]);
    }

    #[test]
    fn last_refreshed_is_monotonic_and_ignores_failures() {
        let mut controller: ListController<u32> = ListController::new("/sources/");
        let state = ViewState::new(&SOURCES_LIST);

        let r = controller.request(&state).unwrap();
        controller.resolve(r.ticket, Ok(Page::new(0, vec![])), at(100));
        assert_eq!(controller.last_refreshed(), Some(at(100)));

        let r = controller.refresh().unwrap();
        controller.resolve(r.ticket, Ok(Page::new(0, vec![])), at(50));
        assert_eq!(controller.last_refreshed(), Some(at(100)));

        let r = controller.refresh().unwrap();
        controller.resolve(r.ticket, Err(FetchError::Transport("offline".into())), at(200));
        assert_eq!(controller.last_refreshed(), Some(at(100)));
    }
}
