use common::list::Pagination;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// Compact pagination bar: range label, page size select and prev/next.
///
/// The current page is displayed as-is even when it lies past the last page;
/// "previous" still leads back.
pub fn pagination_controls(
    pagination: Pagination,
    page_sizes: &[u32],
    on_page: Callback<u32>,
    on_page_size: Callback<u32>,
) -> Html {
    let prev = pagination.page.saturating_sub(1).max(1);
    let next = pagination.page.saturating_add(1);
    let on_size = Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        if let Ok(size) = select.value().parse() {
            on_page_size.emit(size);
        }
    });

    html! {
        <div class="pagination">
            <span class="pagination-range">{ pagination.range_label() }</span>
            <select class="pagination-size" aria-label="Items per page" onchange={on_size}>
                { for page_sizes.iter().map(|size| html! {
                    <option value={size.to_string()} selected={*size == pagination.page_size}>
                        { format!("{} per page", size) }
                    </option>
                }) }
            </select>
            <button
                class="icon-btn"
                title="Previous page"
                disabled={!pagination.has_previous()}
                onclick={on_page.reform(move |_: MouseEvent| prev)}
            >
                <i class="material-icons">{"chevron_left"}</i>
            </button>
            <span class="pagination-page">{ format!("{} of {}", pagination.page, pagination.page_count()) }</span>
            <button
                class="icon-btn"
                title="Next page"
                disabled={!pagination.has_next()}
                onclick={on_page.reform(move |_: MouseEvent| next)}
            >
                <i class="material-icons">{"chevron_right"}</i>
            </button>
        </div>
    }
}
