//! Single-item detail overlay fed by an on-demand fetch.
//!
//! Opening always starts a fresh fetch; closing drops whatever was loaded.
//! Each open hands out a new [`DetailRequest`] so a response that arrives
//! after the overlay was closed, or reopened for another row, is ignored.

use crate::error::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DetailTicket(u64);

/// A detail fetch the caller has to perform for `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest<K> {
    pub ticket: DetailTicket,
    pub key: K,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<K, D> {
    Closed,
    Loading { key: K },
    Loaded { key: K, data: D },
    Failed { key: K, error: FetchError },
}

#[derive(Debug)]
pub struct DetailOverlay<K, D> {
    issued: u64,
    pending: Option<DetailTicket>,
    state: DetailState<K, D>,
}

impl<K: Clone, D> Default for DetailOverlay<K, D> {
    fn default() -> Self {
        Self {
            issued: 0,
            pending: None,
            state: DetailState::Closed,
        }
    }
}

impl<K: Clone, D> DetailOverlay<K, D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the overlay for `key` and returns the fetch to perform. Never
    /// reuses earlier data, even for the same key.
    pub fn open(&mut self, key: K) -> DetailRequest<K> {
        self.issued += 1;
        let ticket = DetailTicket(self.issued);
        self.pending = Some(ticket);
        self.state = DetailState::Loading { key: key.clone() };
        DetailRequest { ticket, key }
    }

    pub fn close(&mut self) {
        self.pending = None;
        self.state = DetailState::Closed;
    }

    /// Applies a fetch result. Returns `false`, and changes nothing, when the
    /// ticket is not the one of the currently open overlay.
    pub fn resolve(&mut self, ticket: DetailTicket, result: Result<D, FetchError>) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        let key = match &self.state {
            DetailState::Loading { key } => key.clone(),
            _ => return false,
        };
        self.state = match result {
            Ok(data) => DetailState::Loaded { key, data },
            Err(error) => DetailState::Failed { key, error },
        };
        true
    }

    pub fn state(&self) -> &DetailState<K, D> {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, DetailState::Closed)
    }

    pub fn key(&self) -> Option<&K> {
        match &self.state {
            DetailState::Closed => None,
            DetailState::Loading { key }
            | DetailState::Loaded { key, .. }
            | DetailState::Failed { key, .. } => Some(key),
        }
    }

    pub fn data(&self) -> Option<&D> {
        match &self.state {
            DetailState::Loaded { data, .. } => Some(data),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_is_kept_distinct_from_data() {
        let mut overlay: DetailOverlay<u64, Vec<u8>> = DetailOverlay::new();
        let request = overlay.open(3);
        assert!(overlay.resolve(request.ticket, Err(FetchError::Decode("bad".into()))));
        assert_eq!(overlay.data(), None);
        assert!(matches!(overlay.state(), DetailState::Failed { key: 3, .. }));
    }

    #[test]
    fn reopening_for_another_row_ignores_first_response() {
        let mut overlay: DetailOverlay<u64, &str> = DetailOverlay::new();
        let first = overlay.open(1);
        let second = overlay.open(2);
        assert!(!overlay.resolve(first.ticket, Ok("row one")));
        assert!(overlay.resolve(second.ticket, Ok("row two")));
        assert_eq!(overlay.key(), Some(&2));
        assert_eq!(overlay.data(), Some(&"row two"));
    }
}
