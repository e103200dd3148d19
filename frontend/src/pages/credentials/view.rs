use common::list::{ListView, Pagination};
use common::model::source::SourceType;
use yew::prelude::*;

use super::{CredentialsListView, Msg};
use crate::components::filter_toolbar::FilterToolbar;
use crate::components::pagination::pagination_controls;
use crate::components::refresh_time_button::refresh_time_button;
use crate::components::table_header::sortable_header;

pub fn view(component: &CredentialsListView, ctx: &Context<CredentialsListView>) -> Html {
    let link = ctx.link();
    let schema = component.view_state.schema();
    let pagination = Pagination::new(
        component.view_state.page(),
        component.view_state.page_size(),
        component.list.total(),
    );
    let columns = schema.columns.len();

    let body = match component.list.view() {
        ListView::Loading => html! {
            <tr class="full-row"><td colspan={columns.to_string()}>{"Loading credentials..."}</td></tr>
        },
        ListView::Empty { .. } => html! {
            <tr class="full-row"><td colspan={columns.to_string()}>
                <div class="empty-state"><h2>{"No credentials available"}</h2></div>
            </td></tr>
        },
        ListView::Failed { error, refreshing } => html! {
            <tr class="full-row"><td colspan={columns.to_string()}>
                <div class="empty-state error">
                    <h2>{"Failed to load credentials"}</h2>
                    <p>{ error.to_string() }</p>
                    <button class="btn secondary" disabled={refreshing} onclick={link.callback(|_| Msg::Refresh)}>{"Retry"}</button>
                </div>
            </td></tr>
        },
        ListView::Rows { items, refreshing, .. } => html! {
            <>
                { for items.iter().map(|credential| {
                    let type_label = SourceType::parse(&credential.cred_type)
                        .map(|t| t.label().to_string())
                        .unwrap_or_else(|| credential.cred_type.clone());
                    html! {
                        <tr key={credential.id} class={classes!(refreshing.then_some("stale"))}>
                            <td>{ &credential.name }</td>
                            <td>{ type_label }</td>
                        </tr>
                    }
                }) }
            </>
        },
    };

    html! {
        <section class="page-section">
            <div class="toolbar">
                <FilterToolbar
                    schema={schema}
                    active={component.view_state.filters().clone()}
                    on_change={link.callback(|(key, value): (String, String)| Msg::Filter(key, value))}
                    on_clear={link.callback(|_: ()| Msg::ClearFilters)}
                />
                <div class="toolbar-item">
                    { refresh_time_button(
                        component.list.last_refreshed(),
                        component.now,
                        component.list.is_loading(),
                        link.callback(|_| Msg::Refresh),
                    ) }
                </div>
            </div>
            <table class="table compact" aria-label="Credentials">
                <thead>
                    { sortable_header(schema, component.view_state.sort(), link.callback(Msg::Sort), html! {}) }
                </thead>
                <tbody>{ body }</tbody>
            </table>
            { pagination_controls(
                pagination,
                schema.page_sizes,
                link.callback(Msg::SetPage),
                link.callback(Msg::SetPageSize),
            ) }
        </section>
    }
}
