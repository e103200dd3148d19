//! Update function for the sources list component.
//!
//! Every change to the view state goes through [`sync`]: the state is written
//! to the URL and the list controller decides whether a new fetch is needed.
//! Responses come back as `Msg::Loaded` with the ticket they were issued for,
//! and the controller drops any that a newer request superseded.

use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::api::CONNECTION_PAGE_SIZE;
use common::detail::DetailState;
use common::error::FetchError;
use common::list::{ListRequest, Resolution, ViewStateError};
use common::model::connection::{ConnectionBuckets, ConnectionDetailItem};
use common::model::page::Page;
use common::model::source::Source;

use crate::helpers::{now, show_toast};
use crate::url_state::replace_query;

use super::messages::Msg;
use super::state::SourcesListView;

/// Central update function for the component.
///
/// Returns `true` to re-render the view, `false` when only side effects occur.
pub fn update(component: &mut SourcesListView, ctx: &Context<SourcesListView>, msg: Msg) -> bool {
    match msg {
        Msg::Sort(column) => {
            let result = component.view_state.toggle_sort(column);
            apply(component, ctx, result)
        }
        Msg::Filter(key, value) => {
            let result = component.view_state.set_filter(&key, &value);
            apply(component, ctx, result)
        }
        Msg::ClearFilters => {
            component.view_state.clear_filters();
            sync(component, ctx);
            true
        }
        Msg::SetPage(page) => {
            let result = component.view_state.set_page(page);
            apply(component, ctx, result)
        }
        Msg::SetPageSize(size) => {
            let result = component.view_state.set_page_size(size);
            apply(component, ctx, result)
        }
        Msg::Refresh => {
            match component.list.refresh() {
                Some(request) => fetch_sources(ctx, request),
                None => sync(component, ctx),
            }
            true
        }
        Msg::Loaded(ticket, result) => {
            match component.list.resolve(ticket, result, now()) {
                Resolution::Applied => {
                    component.now = now();
                    if let Some(err) = component.list.error() {
                        error!(format!("Failed to load sources: {}", err));
                        if err.is_auth_failure() {
                            ctx.props().on_unauthorized.emit(());
                        }
                    }
                    true
                }
                Resolution::Stale => {
                    log!("Discarded a superseded sources response");
                    false
                }
            }
        }
        Msg::ToggleSelected(id) => {
            component.selection.toggle(id);
            true
        }
        Msg::ShowCredentials(id) => {
            component.connections.close();
            component.credentials_for = component.source(id).cloned();
            true
        }
        Msg::ShowConnections(id) => {
            component.credentials_for = None;
            let Some(source) = component.source(id).cloned() else {
                return false;
            };
            let Some(job_id) = source.connection.as_ref().map(|c| c.id) else {
                return false;
            };
            let request = component.connections.open(source);
            let url = ctx
                .props()
                .api
                .endpoints()
                .connection(job_id, request.key.id, CONNECTION_PAGE_SIZE);
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api
                    .fetch_page::<ConnectionDetailItem>(&url)
                    .await
                    .map(|page| ConnectionBuckets::partition(page.results));
                link.send_message(Msg::ConnectionsLoaded(request.ticket, result));
            });
            true
        }
        Msg::ConnectionsLoaded(ticket, result) => {
            if !component.connections.resolve(ticket, result) {
                log!("Discarded a connections response for a closed or reopened overlay");
                return false;
            }
            if let DetailState::Failed { error, .. } = component.connections.state() {
                error!(format!("Failed to load connections: {}", error));
                if error.is_auth_failure() {
                    ctx.props().on_unauthorized.emit(());
                }
            }
            true
        }
        Msg::CloseOverlay => {
            component.credentials_for = None;
            component.connections.close();
            true
        }
        Msg::OpenAddSource(source_type) => {
            component.add_source = Some(source_type);
            true
        }
        Msg::CloseAddSource => {
            component.add_source = None;
            true
        }
        Msg::SourceCreated(source) => {
            component.add_source = None;
            show_toast(&format!("Source \"{}\" added.", source.name));
            if let Some(request) = component.list.refresh() {
                fetch_sources(ctx, request);
            }
            true
        }
        Msg::ScanSelected => {
            let ids: Vec<String> = component.selection.iter().map(|id| id.to_string()).collect();
            log!(format!(
                "Scan requested for {} selected sources: {}",
                component.selection.len(),
                ids.join(", ")
            ));
            show_toast("Scanning sources is not available yet.");
            false
        }
        Msg::ScanSource(id) => {
            if let Some(source) = component.source(id) {
                log!(format!("Scan requested for source {}", source.name));
            }
            show_toast("Scanning sources is not available yet.");
            false
        }
        Msg::Tick => {
            component.now = now();
            true
        }
    }
}

/// Applies a view state change, or logs why it was rejected.
fn apply(
    component: &mut SourcesListView,
    ctx: &Context<SourcesListView>,
    result: Result<(), ViewStateError>,
) -> bool {
    match result {
        Ok(()) => {
            sync(component, ctx);
            true
        }
        Err(err) => {
            error!(format!("Ignored list change: {}", err));
            false
        }
    }
}

/// Mirrors the view state into the URL and fetches when the query changed.
pub fn sync(component: &mut SourcesListView, ctx: &Context<SourcesListView>) {
    replace_query(&component.view_state.to_url_params());
    if let Some(request) = component.list.request(&component.view_state) {
        fetch_sources(ctx, request);
    }
}

fn fetch_sources(ctx: &Context<SourcesListView>, request: ListRequest) {
    log!(format!("Query: {}", request.url));
    let api = ctx.props().api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result: Result<Page<Source>, FetchError> = api.fetch_page(&request.url).await;
        link.send_message(Msg::Loaded(request.ticket, result));
    });
}
