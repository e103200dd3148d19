use common::detail::DetailState;
use common::model::connection::{Bucket, ConnectionBuckets};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::context_icon::bucket_icon;
use crate::pages::sources::{Msg, SourcesListView};
use crate::tops_sheet::modal_top_sheet::ModalTopSheet;

/// Connection breakdown of the source the overlay was opened for: failed,
/// unreachable and successful systems.
pub fn connections_dialog(component: &SourcesListView, link: &Scope<SourcesListView>) -> Html {
    let (source, body) = match component.connections.state() {
        DetailState::Closed => return html! {},
        DetailState::Loading { key } => (key, html! { <p class="muted">{"Loading connections..."}</p> }),
        DetailState::Failed { key, error } => (
            key,
            html! {
                <div class="load-error">
                    <i class="material-icons status danger">{"error"}</i>
                    { format!("Failed to load connections: {}", error) }
                    <button class="btn link" onclick={link.callback({
                        let id = key.id;
                        move |_| Msg::ShowConnections(id)
                    })}>{"Retry"}</button>
                </div>
            },
        ),
        DetailState::Loaded { key, data } => (key, buckets(data)),
    };

    html! {
        <ModalTopSheet title={source.name.clone()} wide=true on_close={link.callback(|_: ()| Msg::CloseOverlay)}>
            { body }
        </ModalTopSheet>
    }
}

fn buckets(data: &ConnectionBuckets) -> Html {
    let sections = [Bucket::Failed, Bucket::UnreachableOrOther, Bucket::Successful]
        .into_iter()
        .map(|bucket| {
            let items = data.get(bucket);
            html! {
                <section class="connection-bucket">
                    <h5>{ bucket_icon(bucket) }{ format!(" {} ({})", bucket.title(), items.len()) }</h5>
                    <ul class="plain-list bordered">
                        { for items.iter().map(|item| html! { <li>{ &item.name }</li> }) }
                    </ul>
                </section>
            }
        });
    html! { <>{ for sections }</> }
}
