//! Sources list page: the paginated, sortable, filterable table of discovery
//! sources with credential and connection drill-downs and the add-source flow.
//!
//! Responsibilities
//! - Wire the Yew `Component` implementation to `update::update` and `view::view`.
//! - On first render, start the clock that keeps relative times current and
//!   issue the first fetch for the state restored from the URL.
//! - When the API client changes (new token or base URL), start over.

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::helpers::TICK_MILLIS;

mod dialogs;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::SourcesListProps;
pub use state::SourcesListView;

impl Component for SourcesListView {
    type Message = Msg;
    type Properties = SourcesListProps;

    fn create(ctx: &Context<Self>) -> Self {
        SourcesListView::new(&ctx.props().api)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().api != old_props.api {
            let ticker = self.ticker.take();
            *self = SourcesListView::new(&ctx.props().api);
            self.ticker = ticker;
            update::sync(self, ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            self.ticker = Some(Interval::new(TICK_MILLIS, move || link.send_message(Msg::Tick)));
            update::sync(self, ctx);
        }
    }
}
