//! Login form: exchanges a username and password for a session token.

use common::config::ConsoleConfig;
use common::error::FetchError;
use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::request_token;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub config: ConsoleConfig,
    /// Receives the new token.
    pub on_login: Callback<String>,
    /// Shown above the form, e.g. when a previous token expired.
    #[prop_or_default]
    pub notice: Option<String>,
}

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    Done(Result<String, FetchError>),
}

pub struct LoginForm {
    username: String,
    password: String,
    busy: bool,
    error: Option<String>,
}

impl Component for LoginForm {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            busy: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(value) => {
                self.username = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                if self.busy || self.username.trim().is_empty() {
                    return false;
                }
                self.busy = true;
                self.error = None;
                let config = ctx.props().config.clone();
                let username = self.username.trim().to_string();
                let password = self.password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = request_token(&config, username, password).await;
                    link.send_message(Msg::Done(result));
                });
                true
            }
            Msg::Done(result) => {
                self.busy = false;
                match result {
                    Ok(token) => {
                        self.password.clear();
                        ctx.props().on_login.emit(token);
                    }
                    Err(err) => {
                        error!(format!("Login failed: {}", err));
                        self.error = Some(match err {
                            FetchError::Status { status: 400 | 401 | 403, .. } => {
                                "Invalid username or password.".to_string()
                            }
                            other => other.to_string(),
                        });
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let value = |e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value();

        html! {
            <section class="login">
                <form class="form" onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Submit })}>
                    <h1>{"Log in to the discovery console"}</h1>
                    if let Some(notice) = &ctx.props().notice {
                        <p class="notice">{ notice }</p>
                    }
                    <div class="form-group">
                        <label for="login-username">{"Username"}</label>
                        <input
                            id="login-username"
                            type="text"
                            autocomplete="username"
                            oninput={link.callback(move |e| Msg::SetUsername(value(e)))}
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">{"Password"}</label>
                        <input
                            id="login-password"
                            type="password"
                            autocomplete="current-password"
                            oninput={link.callback(move |e| Msg::SetPassword(value(e)))}
                        />
                    </div>
                    if let Some(err) = &self.error {
                        <p class="field-error">{ err }</p>
                    }
                    <button class="btn primary" type="submit" disabled={self.busy}>
                        { if self.busy { "Logging in..." } else { "Log in" } }
                    </button>
                </form>
            </section>
        }
    }
}
