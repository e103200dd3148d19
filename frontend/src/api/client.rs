use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use common::api::Endpoints;
use common::config::{ConsoleConfig, CONSOLE_CONFIG_PATH};
use common::error::FetchError;
use common::model::page::Page;
use common::requests::{TokenRequest, TokenResponse};

/// Request signing client for the discovery API.
///
/// Built once the console configuration is known and a session token is
/// available, then handed down to every page as a prop. Every request carries
/// the `Authorization` header; every failure comes back as a [`FetchError`].
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    config: ConsoleConfig,
    endpoints: Endpoints,
    token: String,
}

impl ApiClient {
    pub fn new(config: ConsoleConfig, token: String) -> Self {
        let endpoints = Endpoints::new(&config.api_base_url);
        Self {
            config,
            endpoints,
            token,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn sign(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("Authorization", &self.config.authorization(&self.token))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .sign(Request::get(url))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }

    pub async fn fetch_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>, FetchError> {
        self.get_json(url).await
    }

    pub async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, FetchError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .sign(Request::post(url))
            .json(body)
            .map_err(|e| FetchError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(transport)?;
        decode(response).await
    }
}

/// Loads the runtime configuration published by the console host.
pub async fn load_console_config() -> Result<ConsoleConfig, FetchError> {
    let response = Request::get(CONSOLE_CONFIG_PATH)
        .send()
        .await
        .map_err(transport)?;
    decode(response).await
}

/// Exchanges credentials for a session token. Unsigned, as there is no token
/// yet.
pub async fn request_token(
    config: &ConsoleConfig,
    username: String,
    password: String,
) -> Result<String, FetchError> {
    let url = Endpoints::new(&config.api_base_url).token();
    let response = Request::post(&url)
        .json(&TokenRequest { username, password })
        .map_err(|e| FetchError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(transport)?;
    let token: TokenResponse = decode(response).await?;
    Ok(token.token)
}

fn transport(err: gloo_net::Error) -> FetchError {
    FetchError::Transport(err.to_string())
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    if let Some(err) = FetchError::from_status(status, body.as_str()) {
        return Err(err);
    }
    Ok(serde_json::from_str(&body)?)
}
