//! Client local list state and its round trip through the page URL.

use std::collections::BTreeMap;
use thiserror::Error;
use url::form_urlencoded;

use super::schema::ListSchema;

const PARAM_SORT_COLUMN: &str = "sortColumn";
const PARAM_SORT_DIRECTION: &str = "sortDirection";
const PARAM_FILTERS: &str = "filters";
const PARAM_PAGE: &str = "pageNumber";
const PARAM_PAGE_SIZE: &str = "itemsPerPage";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewStateError {
    #[error("column `{0}` is not sortable")]
    UnknownColumn(String),
    #[error("`{0}` is not a filter of this list")]
    UnknownFilter(String),
    #[error("page numbers start at 1")]
    InvalidPage,
    #[error("page size must be greater than zero")]
    InvalidPageSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<SortDirection> {
        match value {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    pub fn reversed(self) -> SortDirection {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl Sort {
    /// Backend `ordering` value: the column, prefixed with `-` when descending.
    pub fn ordering(&self) -> String {
        match self.direction {
            SortDirection::Asc => self.column.to_string(),
            SortDirection::Desc => format!("-{}", self.column),
        }
    }
}

/// Sort, filters and pagination of one list view.
///
/// Every mutator keeps the invariants (`page >= 1`, `page_size > 0`, sort
/// column sortable in `schema`), so the query built from a `ViewState` is
/// always valid for the list it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    schema: &'static ListSchema,
    sort: Sort,
    filters: BTreeMap<String, String>,
    page: u32,
    page_size: u32,
}

impl ViewState {
    /// Default state of `schema`: default column ascending, no filters, first page.
    pub fn new(schema: &'static ListSchema) -> Self {
        Self {
            schema,
            sort: Sort {
                column: schema.default_sort,
                direction: SortDirection::Asc,
            },
            filters: BTreeMap::new(),
            page: 1,
            page_size: schema.default_page_size,
        }
    }

    pub fn schema(&self) -> &'static ListSchema {
        self.schema
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn set_sort(
        &mut self,
        column: &str,
        direction: SortDirection,
    ) -> Result<(), ViewStateError> {
        let column = self
            .schema
            .sortable_column(column)
            .ok_or_else(|| ViewStateError::UnknownColumn(column.to_string()))?;
        self.sort = Sort { column, direction };
        Ok(())
    }

    /// Header click: the active column flips direction, another column starts
    /// ascending.
    pub fn toggle_sort(&mut self, column: &str) -> Result<(), ViewStateError> {
        let direction = if self.sort.column == column {
            self.sort.direction.reversed()
        } else {
            SortDirection::Asc
        };
        self.set_sort(column, direction)
    }

    /// Sets or, when `value` is blank, removes a filter. Changing filters
    /// returns to the first page.
    pub fn set_filter(&mut self, key: &str, value: &str) -> Result<(), ViewStateError> {
        if self.schema.filter(key).is_none() {
            return Err(ViewStateError::UnknownFilter(key.to_string()));
        }
        let value = value.trim();
        let changed = if value.is_empty() {
            self.filters.remove(key).is_some()
        } else {
            self.filters.insert(key.to_string(), value.to_string()).as_deref() != Some(value)
        };
        if changed {
            self.page = 1;
        }
        Ok(())
    }

    pub fn clear_filters(&mut self) {
        if !self.filters.is_empty() {
            self.filters.clear();
            self.page = 1;
        }
    }

    /// Pages past the last one are accepted; the backend answers them with an
    /// empty page.
    pub fn set_page(&mut self, page: u32) -> Result<(), ViewStateError> {
        if page == 0 {
            return Err(ViewStateError::InvalidPage);
        }
        self.page = page;
        Ok(())
    }

    pub fn set_page_size(&mut self, page_size: u32) -> Result<(), ViewStateError> {
        if page_size == 0 {
            return Err(ViewStateError::InvalidPageSize);
        }
        if page_size != self.page_size {
            self.page_size = page_size;
            self.page = 1;
        }
        Ok(())
    }

    /// Serializes the state into URL query parameters (without `?`).
    pub fn to_url_params(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer
            .append_pair(PARAM_SORT_COLUMN, self.sort.column)
            .append_pair(PARAM_SORT_DIRECTION, self.sort.direction.as_str());
        if !self.filters.is_empty() {
            if let Ok(filters) = serde_json::to_string(&self.filters) {
                serializer.append_pair(PARAM_FILTERS, &filters);
            }
        }
        serializer
            .append_pair(PARAM_PAGE, &self.page.to_string())
            .append_pair(PARAM_PAGE_SIZE, &self.page_size.to_string());
        serializer.finish()
    }

    /// Restores a state from URL query parameters (with or without `?`).
    ///
    /// Lenient: every missing or invalid parameter keeps its default, and
    /// unknown parameters are ignored, so a hand edited URL never breaks the
    /// page.
    pub fn from_url_params(schema: &'static ListSchema, params: &str) -> Self {
        let mut state = ViewState::new(schema);
        let params = params.strip_prefix('?').unwrap_or(params);
        let mut column = None;
        let mut direction = SortDirection::Asc;
        let mut page = None;
        let mut page_size = None;

        for (key, value) in form_urlencoded::parse(params.as_bytes()) {
            match key.as_ref() {
                PARAM_SORT_COLUMN => column = Some(value.into_owned()),
                PARAM_SORT_DIRECTION => {
                    direction = SortDirection::parse(&value).unwrap_or_default()
                }
                PARAM_FILTERS => {
                    if let Ok(filters) = serde_json::from_str::<BTreeMap<String, String>>(&value) {
                        for (k, v) in filters {
                            let _ = state.set_filter(&k, &v);
                        }
                    }
                }
                PARAM_PAGE => page = value.parse().ok(),
                PARAM_PAGE_SIZE => page_size = value.parse().ok(),
                _ => {}
            }
        }

        // Filters reset the page, so pagination is applied last.
        if let Some(size) = page_size {
            let _ = state.set_page_size(size);
        }
        if let Some(page) = page {
            let _ = state.set_page(page);
        }

        let column = column.unwrap_or_else(|| schema.default_sort.to_string());
        if state.set_sort(&column, direction).is_err() {
            let _ = state.set_sort(schema.default_sort, direction);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::schema::SOURCES_LIST;

    #[test]
    fn rejects_unsortable_columns() {
        let mut state = ViewState::new(&SOURCES_LIST);
        assert_eq!(
            state.set_sort("scan", SortDirection::Asc),
            Err(ViewStateError::UnknownColumn("scan".into()))
        );
        assert_eq!(state.sort().column, "name");
    }

    #[test]
    fn toggle_sort_flips_active_column_only() {
        let mut state = ViewState::new(&SOURCES_LIST);
        state.toggle_sort("name").unwrap();
        assert_eq!(state.sort().direction, SortDirection::Desc);
        state.toggle_sort("type").unwrap();
        assert_eq!(state.sort(), Sort { column: "type", direction: SortDirection::Asc });
    }

    #[test]
    fn filter_changes_reset_page() {
        let mut state = ViewState::new(&SOURCES_LIST);
        state.set_page(4).unwrap();
        state.set_filter("search_by_name", "vc").unwrap();
        assert_eq!(state.page(), 1);

        state.set_page(3).unwrap();
        state.set_filter("search_by_name", "vc").unwrap();
        assert_eq!(state.page(), 3, "re-applying the same filter keeps the page");

        state.set_filter("search_by_name", "  ").unwrap();
        assert!(state.filters().is_empty());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn page_and_size_bounds() {
        let mut state = ViewState::new(&SOURCES_LIST);
        assert_eq!(state.set_page(0), Err(ViewStateError::InvalidPage));
        assert_eq!(state.set_page_size(0), Err(ViewStateError::InvalidPageSize));
        assert!(state.set_page(999).is_ok());
        assert_eq!(state.page(), 999);
    }

    #[test]
    fn url_params_survive_reload() {
        let mut state = ViewState::new(&SOURCES_LIST);
        state.set_sort("connection", SortDirection::Desc).unwrap();
        state.set_filter("source_type", "vcenter").unwrap();
        state.set_filter("search_by_name", "lab & prod").unwrap();
        state.set_page_size(20).unwrap();
        state.set_page(2).unwrap();

        let restored = ViewState::from_url_params(&SOURCES_LIST, &state.to_url_params());
        assert_eq!(restored, state);
    }

    #[test]
    fn garbage_url_params_fall_back_to_defaults() {
        let state = ViewState::from_url_params(
            &SOURCES_LIST,
            "?sortColumn=password&sortDirection=sideways&pageNumber=0&itemsPerPage=x&filters={bad",
        );
        assert_eq!(state, ViewState::new(&SOURCES_LIST));
    }
}
