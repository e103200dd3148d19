use std::collections::BTreeSet;

/// Multi-row selection keyed by a stable row identifier.
///
/// Selection survives paging and re-sorting; it only changes through
/// [`Selection::toggle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K: Ord> {
    selected: BTreeSet<K>,
}

impl<K: Ord> Default for Selection<K> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<K: Ord> Selection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `key`. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.remove(&key) {
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }

    /// Bulk actions need more than one selected row.
    pub fn allows_bulk_action(&self) -> bool {
        self.selected.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_action_needs_two_rows() {
        let mut selection = Selection::new();
        selection.toggle(1u64);
        assert!(!selection.allows_bulk_action());
        selection.toggle(2);
        assert!(selection.allows_bulk_action());
    }
}
