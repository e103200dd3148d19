//! View rendering for the sources list.
//!
//! Layout: a toolbar (filters, refresh, add, bulk scan, pagination), the
//! sources table, bottom pagination, then whichever overlay is open. The
//! table body distinguishes four states: first load, rows, no data, and a
//! failed fetch with a retry action.

use common::list::{ListView, Pagination};
use common::model::source::{Source, SourceType};
use common::time::timestamp_ago;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::add_source::AddSourceModal;
use super::dialogs::connections::connections_dialog;
use super::dialogs::credentials::credentials_dialog;
use super::messages::Msg;
use super::state::SourcesListView;
use crate::components::context_icon::connection_icon;
use crate::components::filter_toolbar::FilterToolbar;
use crate::components::pagination::pagination_controls;
use crate::components::refresh_time_button::refresh_time_button;
use crate::components::simple_dropdown::SimpleDropdown;
use crate::components::table_header::sortable_header;
use crate::helpers::format_count;

pub fn view(component: &SourcesListView, ctx: &Context<SourcesListView>) -> Html {
    let link = ctx.link();

    html! {
        <section class="page-section">
            { build_toolbar(component, link) }
            <table class="table compact" aria-label="Sources">
                <thead>
                    { sortable_header(
                        component.view_state.schema(),
                        component.view_state.sort(),
                        link.callback(Msg::Sort),
                        html! { <th class="select-cell" /> },
                    ) }
                </thead>
                <tbody>
                    { build_body(component, link) }
                </tbody>
            </table>
            { build_pagination(component, link) }
            { build_overlays(component, ctx) }
        </section>
    }
}

fn build_pagination(component: &SourcesListView, link: &Scope<SourcesListView>) -> Html {
    let pagination = Pagination::new(
        component.view_state.page(),
        component.view_state.page_size(),
        component.list.total(),
    );
    pagination_controls(
        pagination,
        component.view_state.schema().page_sizes,
        link.callback(Msg::SetPage),
        link.callback(Msg::SetPageSize),
    )
}

fn build_toolbar(component: &SourcesListView, link: &Scope<SourcesListView>) -> Html {
    let add_items: Vec<(String, String)> = SourceType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect();
    let on_add = link.batch_callback(|key: String| SourceType::parse(&key).map(Msg::OpenAddSource));

    html! {
        <div class="toolbar">
            <FilterToolbar
                schema={component.view_state.schema()}
                active={component.view_state.filters().clone()}
                on_change={link.callback(|(key, value): (String, String)| Msg::Filter(key, value))}
                on_clear={link.callback(|_: ()| Msg::ClearFilters)}
            />
            <div class="toolbar-divider" />
            <div class="toolbar-item">
                { refresh_time_button(
                    component.list.last_refreshed(),
                    component.now,
                    component.list.is_loading(),
                    link.callback(|_| Msg::Refresh),
                ) }
                <SimpleDropdown label="Add" variant="primary" items={add_items} on_select={on_add} aria_label="Add source" />
                <button
                    class="btn secondary"
                    disabled={!component.selection.allows_bulk_action()}
                    onclick={link.callback(|_| Msg::ScanSelected)}
                >
                    {"Scan"}
                </button>
            </div>
            <div class="toolbar-item pagination-item">
                { build_pagination(component, link) }
            </div>
        </div>
    }
}

fn build_body(component: &SourcesListView, link: &Scope<SourcesListView>) -> Html {
    let columns = component.view_state.schema().columns.len() + 1;
    match component.list.view() {
        ListView::Loading => full_row(columns, html! {
            <div class="empty-state"><i class="material-icons spin">{"autorenew"}</i><p>{"Loading sources..."}</p></div>
        }),
        ListView::Empty { .. } => full_row(columns, html! {
            <div class="empty-state">
                <i class="material-icons">{"inventory_2"}</i>
                <h2>{"No sources available"}</h2>
            </div>
        }),
        ListView::Failed { error, refreshing } => full_row(columns, html! {
            <div class="empty-state error">
                <i class="material-icons status danger">{"error"}</i>
                <h2>{"Failed to load sources"}</h2>
                <p>{ error.to_string() }</p>
                <button class="btn secondary" disabled={refreshing} onclick={link.callback(|_| Msg::Refresh)}>{"Retry"}</button>
            </div>
        }),
        ListView::Rows { items, refreshing, .. } => html! {
            <>{ for items.iter().map(|source| build_row(component, source, refreshing, link)) }</>
        },
    }
}

fn full_row(columns: usize, content: Html) -> Html {
    html! {
        <tr class="full-row">
            <td colspan={columns.to_string()}>{ content }</td>
        </tr>
    }
}

fn build_row(
    component: &SourcesListView,
    source: &Source,
    refreshing: bool,
    link: &Scope<SourcesListView>,
) -> Html {
    let id = source.id;
    let selected = component.selection.contains(&id);
    let unreachable = source
        .connection
        .as_ref()
        .map(|c| c.source_systems_unreachable)
        .unwrap_or(0);

    html! {
        <tr key={id} class={classes!(selected.then_some("selected"), refreshing.then_some("stale"))}>
            <td class="select-cell">
                <input
                    type="checkbox"
                    aria-label={format!("Select {}", source.name)}
                    checked={selected}
                    onchange={link.callback(move |_| Msg::ToggleSelected(id))}
                />
            </td>
            <td>{ &source.name }</td>
            <td>{ build_connection(component, source, link) }</td>
            <td>{ source.source_type.label() }</td>
            <td>
                <button class="btn link" onclick={link.callback(move |_| Msg::ShowCredentials(id))}>
                    { source.credentials.len() }
                </button>
            </td>
            <td>{ format_count(unreachable) }</td>
            <td class="action-cell">
                <button class="btn link" onclick={link.callback(move |_| Msg::ScanSource(id))}>{"Scan"}</button>
            </td>
        </tr>
    }
}

/// Status icon, status label and how long ago the last scan happened.
fn build_connection(
    component: &SourcesListView,
    source: &Source,
    link: &Scope<SourcesListView>,
) -> Html {
    let Some(connection) = &source.connection else {
        return html! {};
    };
    let id = source.id;
    let when = connection
        .scan_time()
        .and_then(|t| timestamp_ago(t, component.now))
        .unwrap_or_default();

    html! {
        <button class="btn link" onclick={link.callback(move |_| Msg::ShowConnections(id))}>
            { connection_icon(connection.status) }
            { format!(" {} {}", connection.status.label(), when) }
        </button>
    }
}

fn build_overlays(component: &SourcesListView, ctx: &Context<SourcesListView>) -> Html {
    let link = ctx.link();
    let credentials = match &component.credentials_for {
        Some(source) => credentials_dialog(source, link),
        None => html! {},
    };
    let add_source = match component.add_source {
        Some(source_type) => html! {
            <AddSourceModal
                api={ctx.props().api.clone()}
                source_type={source_type}
                on_close={link.callback(|_: ()| Msg::CloseAddSource)}
                on_created={link.callback(Msg::SourceCreated)}
            />
        },
        None => html! {},
    };

    html! {
        <>
            { credentials }
            { connections_dialog(component, link) }
            { add_source }
        </>
    }
}
