//! Application shell: boot, session and navigation.
//!
//! Boot sequence
//! 1. Fetch the console configuration from the host.
//! 2. Restore the session token; without one, show the login form.
//! 3. Build the `ApiClient` from both and render the active page with it.
//!
//! A rejected token (401/403) clears the session and returns to the login
//! form with a notice.
//!
//! Each page keeps its list state in the URL query. Switching tabs restores
//! the query the target page had when it was left, and browser back/forward
//! remounts the page from the query in the restored history entry.

use gloo_console::error;
use gloo_events::EventListener;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::config::ConsoleConfig;
use common::error::FetchError;

use crate::api::{load_console_config, ApiClient};
use crate::pages::credentials::CredentialsListView;
use crate::pages::login::LoginForm;
use crate::pages::sources::SourcesListView;
use crate::session;
use crate::url_state::{current_path, current_query, push_location};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Sources,
    Credentials,
}

impl Page {
    fn from_path(path: &str) -> Page {
        match path.trim_end_matches('/') {
            "/credentials" => Page::Credentials,
            _ => Page::Sources,
        }
    }

    fn path(self) -> &'static str {
        match self {
            Page::Sources => "/sources",
            Page::Credentials => "/credentials",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Page::Sources => "Sources",
            Page::Credentials => "Credentials",
        }
    }
}

pub enum Msg {
    ConfigLoaded(Result<ConsoleConfig, FetchError>),
    LoggedIn(String),
    Unauthorized,
    Logout,
    Navigate(Page),
    HistoryChanged,
}

/// Last list query of each page, so a page left for another tab comes back
/// with its sort, filters and page.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageQueries {
    sources: String,
    credentials: String,
}

impl PageQueries {
    fn slot(&mut self, page: Page) -> &mut String {
        match page {
            Page::Sources => &mut self.sources,
            Page::Credentials => &mut self.credentials,
        }
    }

    /// Records `query` (with or without the leading `?`) as `page`'s state.
    pub fn remember(&mut self, page: Page, query: &str) {
        *self.slot(page) = query.trim_start_matches('?').to_string();
    }

    /// Path plus the remembered query of `page`.
    pub fn location(&self, page: Page) -> String {
        let query = match page {
            Page::Sources => self.sources.as_str(),
            Page::Credentials => self.credentials.as_str(),
        };
        if query.is_empty() {
            page.path().to_string()
        } else {
            format!("{}?{}", page.path(), query)
        }
    }
}

pub struct App {
    config: Option<Result<ConsoleConfig, FetchError>>,
    api: Option<ApiClient>,
    page: Page,
    queries: PageQueries,
    /// Bumped on history navigation so the page remounts from the URL.
    generation: u64,
    notice: Option<String>,
    _popstate: Option<EventListener>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(load_console_config().await));
        });
        let popstate = web_sys::window().map(|window| {
            let link = ctx.link().clone();
            EventListener::new(&window, "popstate", move |_| link.send_message(Msg::HistoryChanged))
        });
        Self {
            config: None,
            api: None,
            page: Page::from_path(&current_path()),
            queries: PageQueries::default(),
            generation: 0,
            notice: None,
            _popstate: popstate,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(result) => {
                match &result {
                    Ok(config) => {
                        self.api = session::restore_token()
                            .map(|token| ApiClient::new(config.clone(), token));
                    }
                    Err(err) => error!(format!("Failed to load console configuration: {}", err)),
                }
                self.config = Some(result);
            }
            Msg::LoggedIn(token) => {
                session::store_token(&token);
                self.notice = None;
                if let Some(Ok(config)) = &self.config {
                    self.api = Some(ApiClient::new(config.clone(), token));
                }
            }
            Msg::Unauthorized => {
                if self.api.take().is_some() {
                    session::clear_token();
                    self.notice = Some("Your session has expired. Log in again.".to_string());
                }
            }
            Msg::Logout => {
                session::clear_token();
                self.api = None;
            }
            Msg::Navigate(page) => {
                if page == self.page {
                    return false;
                }
                self.queries.remember(self.page, &current_query());
                push_location(&self.queries.location(page));
                self.page = page;
            }
            Msg::HistoryChanged => {
                self.page = Page::from_path(&current_path());
                self.generation += 1;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let content = match (&self.config, &self.api) {
            (None, _) => html! { <p class="muted boot">{"Loading console..."}</p> },
            (Some(Err(err)), _) => html! {
                <div class="empty-state error">
                    <h2>{"The console configuration could not be loaded"}</h2>
                    <p>{ err.to_string() }</p>
                </div>
            },
            (Some(Ok(config)), None) => html! {
                <LoginForm
                    config={config.clone()}
                    on_login={link.callback(Msg::LoggedIn)}
                    notice={self.notice.clone()}
                />
            },
            (Some(Ok(_)), Some(api)) => match self.page {
                Page::Sources => html! {
                    <SourcesListView key={self.generation} api={api.clone()} on_unauthorized={link.callback(|_: ()| Msg::Unauthorized)} />
                },
                Page::Credentials => html! {
                    <CredentialsListView key={self.generation} api={api.clone()} on_unauthorized={link.callback(|_: ()| Msg::Unauthorized)} />
                },
            },
        };

        html! {
            <div class="app">
                <header class="masthead">
                    <span class="brand">{"Discovery"}</span>
                    if self.api.is_some() {
                        <>
                        <nav class="tabs">
                            { for [Page::Sources, Page::Credentials].into_iter().map(|page| html! {
                                <button
                                    class={classes!("tab-btn", (page == self.page).then_some("active"))}
                                    onclick={link.callback(move |_| Msg::Navigate(page))}
                                >
                                    { page.title() }
                                </button>
                            }) }
                        </nav>
                        <button class="btn link logout" onclick={link.callback(|_| Msg::Logout)}>{"Log out"}</button>
                        </>
                    }
                </header>
                <main>{ content }</main>
            </div>
        }
    }
}
