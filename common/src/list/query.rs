//! Canonical request query of a list view.
//!
//! The query is a pure function of the [`ViewState`]: the same state always
//! yields the same string, which is what lets the controller detect redundant
//! fetches by comparing URLs.

use url::form_urlencoded::byte_serialize;

use super::view_state::ViewState;

/// `ordering=<sort>&page=<n>&page-size=<m>` followed by the active filters as
/// `key=value` pairs in key order. Filter values are form encoded.
pub fn list_query(state: &ViewState) -> String {
    let mut query = format!(
        "ordering={}&page={}&page-size={}",
        state.sort().ordering(),
        state.page(),
        state.page_size()
    );
    for (key, value) in state.filters() {
        query.push('&');
        query.extend(byte_serialize(key.as_bytes()));
        query.push('=');
        query.extend(byte_serialize(value.as_bytes()));
    }
    query
}

/// Full request URL of `state` against a collection `endpoint`.
pub fn list_url(endpoint: &str, state: &ViewState) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}{}", endpoint, separator, list_query(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::schema::SOURCES_LIST;
    use crate::list::view_state::SortDirection;

    #[test]
    fn default_state_has_no_filter_section() {
        let state = ViewState::new(&SOURCES_LIST);
        assert_eq!(list_query(&state), "ordering=name&page=1&page-size=10");
    }

    #[test]
    fn filters_follow_pagination_in_key_order() {
        let mut state = ViewState::new(&SOURCES_LIST);
        state.set_filter("source_type", "network").unwrap();
        state.set_filter("search_by_name", "lab one").unwrap();
        state.set_sort("type", SortDirection::Desc).unwrap();
        assert_eq!(
            list_query(&state),
            "ordering=-type&page=1&page-size=10&search_by_name=lab+one&source_type=network"
        );
    }

    #[test]
    fn list_url_appends_to_existing_query() {
        let state = ViewState::new(&SOURCES_LIST);
        assert_eq!(
            list_url("https://api/sources/", &state),
            "https://api/sources/?ordering=name&page=1&page-size=10"
        );
        assert_eq!(
            list_url("https://api/sources/?scan=true", &state),
            "https://api/sources/?scan=true&ordering=name&page=1&page-size=10"
        );
    }
}
