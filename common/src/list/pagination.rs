/// Page arithmetic behind the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total,
        }
    }

    /// Number of pages; an empty collection still has one (empty) page.
    pub fn page_count(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// 1-based index of the first item on the current page, 0 when the page
    /// is past the end.
    pub fn first_item(&self) -> u64 {
        let first = u64::from(self.page - 1) * u64::from(self.page_size) + 1;
        if first > self.total { 0 } else { first }
    }

    /// 1-based index of the last item on the current page, 0 when the page is
    /// past the end.
    pub fn last_item(&self) -> u64 {
        match self.first_item() {
            0 => 0,
            first => (first + u64::from(self.page_size) - 1).min(self.total),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// "1 - 10 of 42" style label.
    pub fn range_label(&self) -> String {
        format!("{} - {} of {}", self.first_item(), self.last_item(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_pages() {
        assert_eq!(Pagination::new(1, 10, 0).page_count(), 1);
        assert_eq!(Pagination::new(1, 10, 10).page_count(), 1);
        assert_eq!(Pagination::new(1, 10, 11).page_count(), 2);
    }

    #[test]
    fn item_range_on_last_page() {
        let p = Pagination::new(3, 10, 25);
        assert_eq!((p.first_item(), p.last_item()), (21, 25));
        assert!(p.has_previous());
        assert!(!p.has_next());
        assert_eq!(p.range_label(), "21 - 25 of 25");
    }

    #[test]
    fn page_past_the_end_is_not_clamped() {
        let p = Pagination::new(9, 10, 25);
        assert_eq!(p.page, 9);
        assert_eq!((p.first_item(), p.last_item()), (0, 0));
        assert!(!p.has_next());
    }
}
