//! Add-source modal.
//!
//! On mount it loads the credentials usable by the chosen source type, then
//! collects the form and posts it to `POST /sources/`. Validation happens in
//! `common::forms`, so the modal only shows field errors and never sends an
//! incomplete body.

use common::error::FetchError;
use common::forms::{AddSourceForm, FormError, SSL_PROTOCOLS};
use common::model::credential::Credential;
use common::model::page::Page;
use common::model::source::{Source, SourceType};
use gloo_console::error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::tops_sheet::modal_top_sheet::ModalTopSheet;

#[derive(Properties, PartialEq)]
pub struct AddSourceProps {
    pub api: ApiClient,
    pub source_type: SourceType,
    pub on_close: Callback<()>,
    pub on_created: Callback<Source>,
}

pub enum Msg {
    CredentialsLoaded(Result<Page<Credential>, FetchError>),
    SetName(String),
    SetHosts(String),
    SetPort(String),
    ToggleCredential(u64),
    SetUseParamiko(bool),
    SetSslVerify(bool),
    SetSslProtocol(String),
    SetDisableSsl(bool),
    Submit,
    Submitted(Result<Source, FetchError>),
}

pub struct AddSourceModal {
    form: AddSourceForm,
    credentials: Option<Result<Vec<Credential>, FetchError>>,
    errors: Vec<FormError>,
    submit_error: Option<FetchError>,
    submitting: bool,
}

impl AddSourceModal {
    fn error_for(&self, field: &str) -> Html {
        match self.errors.iter().find(|e| e.field() == field) {
            Some(err) => html! { <p class="field-error">{ err.to_string() }</p> },
            None => html! {},
        }
    }

    fn credential_options(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match &self.credentials {
            None => html! { <p class="muted">{"Loading credentials..."}</p> },
            Some(Err(err)) => html! { <p class="field-error">{ format!("Failed to load credentials: {}", err) }</p> },
            Some(Ok(credentials)) if credentials.is_empty() => html! {
                <p class="muted">{ format!("No {} credentials exist yet.", ctx.props().source_type.label()) }</p>
            },
            Some(Ok(credentials)) => html! {
                <div class="checkbox-list">
                    { for credentials.iter().map(|c| {
                        let id = c.id;
                        html! {
                            <label key={c.id} class="checkbox">
                                <input
                                    type="checkbox"
                                    checked={self.form.credentials.contains(&id)}
                                    onchange={link.callback(move |_| Msg::ToggleCredential(id))}
                                />
                                { &c.name }
                            </label>
                        }
                    }) }
                </div>
            },
        }
    }

    fn type_options(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if ctx.props().source_type == SourceType::Network {
            return html! {
                <label class="checkbox">
                    <input
                        type="checkbox"
                        checked={self.form.use_paramiko}
                        onchange={link.callback(|e: Event| Msg::SetUseParamiko(checked(&e)))}
                    />
                    {"Connect using Paramiko instead of Open SSH"}
                </label>
            };
        }
        html! {
            <>
                <div class="form-group">
                    <label for="source-ssl-protocol">{"SSL protocol"}</label>
                    <select
                        id="source-ssl-protocol"
                        disabled={self.form.disable_ssl}
                        onchange={link.callback(|e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            Msg::SetSslProtocol(select.value())
                        })}
                    >
                        { for SSL_PROTOCOLS.iter().map(|p| html! {
                            <option value={*p} selected={self.form.ssl_protocol == *p}>{ *p }</option>
                        }) }
                    </select>
                </div>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        checked={self.form.ssl_cert_verify}
                        disabled={self.form.disable_ssl}
                        onchange={link.callback(|e: Event| Msg::SetSslVerify(checked(&e)))}
                    />
                    {"Verify SSL certificate"}
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        checked={self.form.disable_ssl}
                        onchange={link.callback(|e: Event| Msg::SetDisableSsl(checked(&e)))}
                    />
                    {"Disable SSL"}
                </label>
            </>
        }
    }
}

fn checked(e: &Event) -> bool {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.checked()
}

fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

impl Component for AddSourceModal {
    type Message = Msg;
    type Properties = AddSourceProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let url = props.api.endpoints().credentials_by_type(props.source_type);
        let api = props.api.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let result = api.fetch_page::<Credential>(&url).await;
            link.send_message(Msg::CredentialsLoaded(result));
        });

        Self {
            form: AddSourceForm::new(props.source_type),
            credentials: None,
            errors: Vec::new(),
            submit_error: None,
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CredentialsLoaded(result) => {
                if let Err(err) = &result {
                    error!(format!("Failed to load credentials: {}", err));
                }
                self.credentials = Some(result.map(|page| page.results));
            }
            Msg::SetName(name) => self.form.name = name,
            Msg::SetHosts(hosts) => self.form.hosts = hosts,
            Msg::SetPort(port) => self.form.port = port,
            Msg::ToggleCredential(id) => self.form.toggle_credential(id),
            Msg::SetUseParamiko(value) => self.form.use_paramiko = value,
            Msg::SetSslVerify(value) => self.form.ssl_cert_verify = value,
            Msg::SetSslProtocol(value) => self.form.ssl_protocol = value,
            Msg::SetDisableSsl(value) => self.form.disable_ssl = value,
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                match self.form.validate() {
                    Ok(body) => {
                        self.errors.clear();
                        self.submit_error = None;
                        self.submitting = true;
                        let api = ctx.props().api.clone();
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            let url = api.endpoints().sources();
                            let result = api.post_json::<_, Source>(&url, &body).await;
                            link.send_message(Msg::Submitted(result));
                        });
                    }
                    Err(errors) => self.errors = errors,
                }
            }
            Msg::Submitted(result) => {
                self.submitting = false;
                match result {
                    Ok(source) => ctx.props().on_created.emit(source),
                    Err(err) => {
                        error!(format!("Failed to add source: {}", err));
                        self.submit_error = Some(err);
                    }
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let source_type = props.source_type;

        let actions = html! {
            <>
                <button class="btn primary" disabled={self.submitting} onclick={link.callback(|_| Msg::Submit)}>
                    { if self.submitting { "Saving..." } else { "Save" } }
                </button>
                <button class="btn link" onclick={props.on_close.reform(|_: MouseEvent| ())}>{"Cancel"}</button>
            </>
        };

        html! {
            <ModalTopSheet
                title={format!("Add source: {}", source_type.label())}
                on_close={props.on_close.clone()}
                actions={actions}
            >
                <form class="form horizontal" onsubmit={link.callback(|e: SubmitEvent| { e.prevent_default(); Msg::Submit })}>
                    <div class="form-group">
                        <label for="source-name">{"Name"}<span class="required">{"*"}</span></label>
                        <input
                            id="source-name"
                            type="text"
                            placeholder="Enter a name for the source"
                            value={self.form.name.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))}
                        />
                        { self.error_for("name") }
                    </div>
                    <div class="form-group">
                        <label for="source-hosts">{"Search addresses"}<span class="required">{"*"}</span></label>
                        <textarea
                            id="source-hosts"
                            placeholder="Enter values separated by commas"
                            value={self.form.hosts.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let area: HtmlTextAreaElement = e.target_unchecked_into();
                                Msg::SetHosts(area.value())
                            })}
                        />
                        <p class="helper">{"Type IP addresses, IP ranges, and DNS host names. Wildcards are valid. Use CIDR or Ansible notation for ranges."}</p>
                        { self.error_for("hosts") }
                    </div>
                    <div class="form-group">
                        <label for="source-port">{"Port"}</label>
                        <input
                            id="source-port"
                            type="text"
                            inputmode="numeric"
                            placeholder="Optional"
                            value={self.form.port.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetPort(input_value(&e)))}
                        />
                        <p class="helper">{ format!("Default port is {}.", source_type.default_port()) }</p>
                        { self.error_for("port") }
                    </div>
                    <div class="form-group">
                        <label>{"Credential"}<span class="required">{"*"}</span></label>
                        { self.credential_options(ctx) }
                        { self.error_for("credentials") }
                    </div>
                    { self.type_options(ctx) }
                    if let Some(err) = &self.submit_error {
                        <p class="field-error">{ format!("Could not add the source: {}", err) }</p>
                    }
                </form>
            </ModalTopSheet>
        }
    }
}
