use serde::{Deserialize, Serialize};

/// Runtime settings the console host publishes at [`CONSOLE_CONFIG_PATH`].
///
/// The frontend fetches this once at boot and threads it into its API client;
/// nothing else in the browser knows where the discovery API lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Base URL of the discovery REST API, e.g. `https://0.0.0.0:9443/api/v1`.
    pub api_base_url: String,
    /// Scheme placed before the token in the `Authorization` header.
    #[serde(default = "default_auth_scheme")]
    pub auth_scheme: String,
}

pub const CONSOLE_CONFIG_PATH: &str = "/console/config.json";

fn default_auth_scheme() -> String {
    "Token".to_string()
}

impl ConsoleConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            auth_scheme: default_auth_scheme(),
        }
    }

    /// Value of the `Authorization` header for `token`.
    pub fn authorization(&self, token: &str) -> String {
        format!("{} {}", self.auth_scheme, token)
    }
}
