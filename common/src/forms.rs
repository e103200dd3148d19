//! Add-source form model and its validation into a [`NewSource`] body.

use regex::Regex;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;
use thiserror::Error;

use crate::model::source::SourceType;
use crate::requests::NewSource;

static HOST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s]+").expect("valid host separator pattern"));

pub const DEFAULT_SSL_PROTOCOL: &str = "SSLv23";
pub const SSL_PROTOCOLS: [&str; 5] = ["SSLv23", "TLSv1", "TLSv1_1", "TLSv1_2", "TLSv1_3"];

/// A field level validation problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Enter a name for the source")]
    MissingName,
    #[error("Enter at least one address")]
    MissingHosts,
    #[error("`{0}` is not a valid port")]
    InvalidPort(String),
    #[error("Select at least one credential")]
    MissingCredentials,
}

impl FormError {
    /// Id of the form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            FormError::MissingName => "name",
            FormError::MissingHosts => "hosts",
            FormError::InvalidPort(_) => "port",
            FormError::MissingCredentials => "credentials",
        }
    }
}

/// Raw values of the add-source modal, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSourceForm {
    pub source_type: SourceType,
    pub name: String,
    /// Addresses separated by commas, spaces or newlines.
    pub hosts: String,
    /// Empty means "use the backend default".
    pub port: String,
    pub credentials: BTreeSet<u64>,
    /// Network sources: connect with Paramiko instead of OpenSSH.
    pub use_paramiko: bool,
    pub ssl_cert_verify: bool,
    pub ssl_protocol: String,
    pub disable_ssl: bool,
}

impl AddSourceForm {
    pub fn new(source_type: SourceType) -> Self {
        Self {
            source_type,
            name: String::new(),
            hosts: String::new(),
            port: String::new(),
            credentials: BTreeSet::new(),
            use_paramiko: false,
            ssl_cert_verify: true,
            ssl_protocol: DEFAULT_SSL_PROTOCOL.to_string(),
            disable_ssl: false,
        }
    }

    pub fn toggle_credential(&mut self, id: u64) {
        if !self.credentials.remove(&id) {
            self.credentials.insert(id);
        }
    }

    /// Options object for the source type: SSH flavor for network sources,
    /// TLS settings for everything else.
    pub fn options(&self) -> BTreeMap<String, Value> {
        let mut options = BTreeMap::new();
        match self.source_type {
            SourceType::Network => {
                options.insert("use_paramiko".to_string(), Value::Bool(self.use_paramiko));
            }
            _ => {
                options.insert("ssl_cert_verify".to_string(), Value::Bool(self.ssl_cert_verify));
                options.insert(
                    "ssl_protocol".to_string(),
                    Value::String(self.ssl_protocol.clone()),
                );
                options.insert("disable_ssl".to_string(), Value::Bool(self.disable_ssl));
            }
        }
        options
    }

    /// Checks every field and builds the request body, or returns all
    /// problems found, in form order.
    pub fn validate(&self) -> Result<NewSource, Vec<FormError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FormError::MissingName);
        }

        let hosts = split_hosts(&self.hosts);
        if hosts.is_empty() {
            errors.push(FormError::MissingHosts);
        }

        let port = match parse_port(&self.port) {
            Ok(port) => port,
            Err(err) => {
                errors.push(err);
                None
            }
        };

        if self.credentials.is_empty() {
            errors.push(FormError::MissingCredentials);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewSource {
            source_type: self.source_type,
            credentials: self.credentials.iter().copied().collect(),
            hosts,
            name: name.to_string(),
            port,
            options: self.options(),
        })
    }
}

/// Splits the hosts text area into addresses, dropping empty entries.
pub fn split_hosts(text: &str) -> Vec<String> {
    HOST_SEPARATOR
        .split(text)
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_port(text: &str) -> Result<Option<u16>, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    match text.parse::<u16>() {
        Ok(port) if port > 0 => Ok(Some(port)),
        _ => Err(FormError::InvalidPort(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_hosts_accepts_mixed_separators() {
        assert_eq!(
            split_hosts("10.0.0.1, 10.0.0.0/24\nlab-*.example.com ,,"),
            vec!["10.0.0.1", "10.0.0.0/24", "lab-*.example.com"]
        );
        assert!(split_hosts(" , \n").is_empty());
    }

    #[test]
    fn port_must_be_in_range() {
        assert_eq!(parse_port(""), Ok(None));
        assert_eq!(parse_port(" 22 "), Ok(Some(22)));
        assert_eq!(parse_port("0"), Err(FormError::InvalidPort("0".into())));
        assert_eq!(parse_port("70000"), Err(FormError::InvalidPort("70000".into())));
    }
}
