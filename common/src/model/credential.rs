use serde::{Deserialize, Serialize};

/// The short credential reference embedded in each source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRef {
    pub id: u64,
    pub name: String,
}

/// A reusable authentication secret as listed by `GET /credentials/`.
/// The secret material itself is never returned to the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub cred_type: String,
}
