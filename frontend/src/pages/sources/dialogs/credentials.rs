use common::model::source::Source;
use yew::html::Scope;
use yew::prelude::*;

use crate::pages::sources::{Msg, SourcesListView};
use crate::tops_sheet::modal_top_sheet::ModalTopSheet;

/// Credentials attached to `source`, straight from its list row.
pub fn credentials_dialog(source: &Source, link: &Scope<SourcesListView>) -> Html {
    html! {
        <ModalTopSheet title={format!("Credentials: {}", source.name)} on_close={link.callback(|_: ()| Msg::CloseOverlay)}>
            if source.credentials.is_empty() {
                <p class="muted">{"No credentials attached."}</p>
            } else {
                <ul class="plain-list bordered">
                    { for source.credentials.iter().map(|c| html! { <li key={c.id}>{ &c.name }</li> }) }
                </ul>
            }
        </ModalTopSheet>
    }
}
