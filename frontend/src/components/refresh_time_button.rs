use chrono::{DateTime, Utc};
use common::time::refreshed_label;
use web_sys::MouseEvent;
use yew::{html, Callback, Html};

/// "Refreshed 3 minutes ago" button. The owner re-renders it periodically so
/// the label stays current.
pub fn refresh_time_button(
    last_refresh: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    loading: bool,
    on_refresh: Callback<()>,
) -> Html {
    html! {
        <button class="btn link refresh" disabled={loading} onclick={on_refresh.reform(|_: MouseEvent| ())}>
            <i class={if loading { "material-icons spin" } else { "material-icons" }}>{"sync"}</i>
            { refreshed_label(last_refresh, now) }
        </button>
    }
}
