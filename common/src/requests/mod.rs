//! Request bodies sent to the discovery API.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::source::SourceType;

/// Body of `POST /sources/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSource {
    pub source_type: SourceType,
    /// Ids of the credentials attached to the source.
    pub credentials: Vec<u64>,
    pub hosts: Vec<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub options: BTreeMap<String, serde_json::Value>,
}

/// Body of `POST /token/`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Response of `POST /token/`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
