use common::list::{ListSchema, Sort, SortDirection};
use web_sys::MouseEvent;
use yew::{classes, html, Callback, Html};

/// Header row for `schema`'s columns. Sortable headers report their key
/// through `on_sort`; the active one shows its direction.
///
/// `leading` is rendered before the columns (e.g. a select-all cell).
pub fn sortable_header(
    schema: &'static ListSchema,
    sort: Sort,
    on_sort: Callback<&'static str>,
    leading: Html,
) -> Html {
    html! {
        <tr>
            { leading }
            { for schema.columns.iter().map(|column| {
                if !column.sortable {
                    return html! { <th>{ column.title }</th> };
                }
                let active = sort.column == column.key;
                let aria_sort = match (active, sort.direction) {
                    (false, _) => "none",
                    (true, SortDirection::Asc) => "ascending",
                    (true, SortDirection::Desc) => "descending",
                };
                let icon = match (active, sort.direction) {
                    (false, _) => "unfold_more",
                    (true, SortDirection::Asc) => "arrow_upward",
                    (true, SortDirection::Desc) => "arrow_downward",
                };
                let key = column.key;
                html! {
                    <th class={classes!("sortable", active.then_some("active"))} aria-sort={aria_sort}>
                        <button class="sort-btn" onclick={on_sort.reform(move |_: MouseEvent| key)}>
                            { column.title }
                            <i class="material-icons sort-icon">{ icon }</i>
                        </button>
                    </th>
                }
            }) }
        </tr>
    }
}
