use yew::prelude::*;

use crate::api::ApiClient;

/// Properties for the `SourcesListView`.
#[derive(Properties, PartialEq, Clone)]
pub struct SourcesListProps {
    /// Signed client for the discovery API. A new client (new token or base
    /// URL) resets the list and fetches again.
    pub api: ApiClient,

    /// Called when the API rejects the session token, so the app can return
    /// to the login form.
    pub on_unauthorized: Callback<()>,
}
