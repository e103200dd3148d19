//! Console host configuration, resolved once from the environment at start.
//!
//! | Variable               | Default                        |
//! |------------------------|--------------------------------|
//! | `CONSOLE_HOST`         | `127.0.0.1`                    |
//! | `CONSOLE_PORT`         | `8080`                         |
//! | `CONSOLE_API_BASE_URL` | `https://0.0.0.0:9443/api/v1`  |
//! | `CONSOLE_AUTH_SCHEME`  | `Token`                        |
//! | `CONSOLE_OPEN_BROWSER` | `true`                         |

use common::config::ConsoleConfig;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_API_BASE_URL: &str = "https://0.0.0.0:9443/api/v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a port number, got `{value}`")]
    InvalidPort { name: &'static str, value: String },
    #[error("{name} must be true or false, got `{value}`")]
    InvalidFlag { name: &'static str, value: String },
    #[error("{name} must be an http(s) URL, got `{value}`")]
    InvalidUrl { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    /// Published to the browser at `common::config::CONSOLE_CONFIG_PATH`.
    pub console: ConsoleConfig,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = read("CONSOLE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match read("CONSOLE_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort {
                name: "CONSOLE_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let open_browser = match read("CONSOLE_OPEN_BROWSER") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::InvalidFlag {
                name: "CONSOLE_OPEN_BROWSER",
                value,
            })?,
            None => true,
        };

        let api_base_url =
            read("CONSOLE_API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl {
                name: "CONSOLE_API_BASE_URL",
                value: api_base_url,
            });
        }

        let mut console = ConsoleConfig::new(api_base_url.trim_end_matches('/'));
        if let Some(scheme) = read("CONSOLE_AUTH_SCHEME") {
            console.auth_scheme = scheme;
        }

        Ok(Self {
            host,
            port,
            open_browser,
            console,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]).unwrap();
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert!(config.open_browser);
        assert_eq!(config.console.api_base_url, "https://0.0.0.0:9443/api/v1");
        assert_eq!(config.console.auth_scheme, "Token");
    }

    #[test]
    fn overrides_are_applied() {
        let config = config(&[
            ("CONSOLE_PORT", "9000"),
            ("CONSOLE_OPEN_BROWSER", "no"),
            ("CONSOLE_API_BASE_URL", "https://discovery.lab/api/v1/"),
            ("CONSOLE_AUTH_SCHEME", "Bearer"),
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
        assert_eq!(config.console.api_base_url, "https://discovery.lab/api/v1");
        assert_eq!(config.console.authorization("abc"), "Bearer abc");
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_eq!(
            config(&[("CONSOLE_PORT", "eighty")]),
            Err(ConfigError::InvalidPort {
                name: "CONSOLE_PORT",
                value: "eighty".into()
            })
        );
        assert!(matches!(
            config(&[("CONSOLE_API_BASE_URL", "discovery.lab")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            config(&[("CONSOLE_OPEN_BROWSER", "maybe")]),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }
}
