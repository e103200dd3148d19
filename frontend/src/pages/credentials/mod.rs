//! Credentials list page.
//!
//! Same list contract as the sources page, with the credentials schema:
//! sortable by name and type, filterable by name and type, paginated, state
//! mirrored into the URL.

use chrono::{DateTime, Utc};
use gloo_console::{error, log};
use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::FetchError;
use common::list::{
    ListController, ListRequest, Resolution, Ticket, ViewState, ViewStateError, CREDENTIALS_LIST,
};
use common::model::credential::Credential;
use common::model::page::Page;

use crate::api::ApiClient;
use crate::helpers::{now, TICK_MILLIS};
use crate::url_state::{current_query, replace_query};

mod view;

#[derive(Properties, PartialEq, Clone)]
pub struct CredentialsListProps {
    pub api: ApiClient,
    pub on_unauthorized: Callback<()>,
}

pub enum Msg {
    Sort(&'static str),
    Filter(String, String),
    ClearFilters,
    SetPage(u32),
    SetPageSize(u32),
    Refresh,
    Loaded(Ticket, Result<Page<Credential>, FetchError>),
    Tick,
}

pub struct CredentialsListView {
    pub view_state: ViewState,
    pub list: ListController<Credential>,
    /// Clock for the "Refreshed ..." label; advanced by `ticker`.
    pub now: DateTime<Utc>,
    pub ticker: Option<Interval>,
}

impl CredentialsListView {
    fn new(api: &ApiClient) -> Self {
        Self {
            view_state: ViewState::from_url_params(&CREDENTIALS_LIST, &current_query()),
            list: ListController::new(api.endpoints().credentials()),
            now: now(),
            ticker: None,
        }
    }

    fn apply(&mut self, ctx: &Context<Self>, result: Result<(), ViewStateError>) -> bool {
        match result {
            Ok(()) => {
                self.sync(ctx);
                true
            }
            Err(err) => {
                error!(format!("Ignored list change: {}", err));
                false
            }
        }
    }

    fn sync(&mut self, ctx: &Context<Self>) {
        replace_query(&self.view_state.to_url_params());
        if let Some(request) = self.list.request(&self.view_state) {
            fetch(ctx, request);
        }
    }
}

fn fetch(ctx: &Context<CredentialsListView>, request: ListRequest) {
    log!(format!("Query: {}", request.url));
    let api = ctx.props().api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api.fetch_page::<Credential>(&request.url).await;
        link.send_message(Msg::Loaded(request.ticket, result));
    });
}

impl Component for CredentialsListView {
    type Message = Msg;
    type Properties = CredentialsListProps;

    fn create(ctx: &Context<Self>) -> Self {
        CredentialsListView::new(&ctx.props().api)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().api != old_props.api {
            let ticker = self.ticker.take();
            *self = CredentialsListView::new(&ctx.props().api);
            self.ticker = ticker;
            self.sync(ctx);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Sort(column) => {
                let result = self.view_state.toggle_sort(column);
                self.apply(ctx, result)
            }
            Msg::Filter(key, value) => {
                let result = self.view_state.set_filter(&key, &value);
                self.apply(ctx, result)
            }
            Msg::ClearFilters => {
                self.view_state.clear_filters();
                self.sync(ctx);
                true
            }
            Msg::SetPage(page) => {
                let result = self.view_state.set_page(page);
                self.apply(ctx, result)
            }
            Msg::SetPageSize(size) => {
                let result = self.view_state.set_page_size(size);
                self.apply(ctx, result)
            }
            Msg::Refresh => {
                match self.list.refresh() {
                    Some(request) => fetch(ctx, request),
                    None => self.sync(ctx),
                }
                true
            }
            Msg::Loaded(ticket, result) => {
                match self.list.resolve(ticket, result, now()) {
                    Resolution::Applied => {
                        self.now = now();
                        if let Some(err) = self.list.error() {
                            error!(format!("Failed to load credentials: {}", err));
                            if err.is_auth_failure() {
                                ctx.props().on_unauthorized.emit(());
                            }
                        }
                        true
                    }
                    Resolution::Stale => {
                        log!("Discarded a superseded credentials response");
                        false
                    }
                }
            }
            Msg::Tick => {
                self.now = now();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            self.ticker = Some(Interval::new(TICK_MILLIS, move || link.send_message(Msg::Tick)));
            self.sync(ctx);
        }
    }
}
