//! Failure taxonomy for calls to the discovery API.

use thiserror::Error;

/// Why a fetch did not produce data.
///
/// Views keep this value so they can show "failed to load" instead of
/// collapsing a failure into an empty result set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never got an HTTP response (network down, CORS, DNS, ...).
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// No session token is available; the user has to log in.
    #[error("not logged in")]
    Unauthenticated,
}

impl FetchError {
    /// Classifies an HTTP status; `None` for 2xx.
    pub fn from_status(status: u16, body: impl Into<String>) -> Option<FetchError> {
        match status {
            200..=299 => None,
            _ => Some(FetchError::Status {
                status,
                body: body.into(),
            }),
        }
    }

    /// 401 and 403 mean the stored token is no longer accepted.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            FetchError::Unauthenticated | FetchError::Status { status: 401 | 403, .. }
        )
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_are_not_errors() {
        assert_eq!(FetchError::from_status(200, ""), None);
        assert_eq!(FetchError::from_status(204, ""), None);
        let err = FetchError::from_status(503, "down").unwrap();
        assert_eq!(err.to_string(), "server responded with status 503");
        assert!(!err.is_auth_failure());
        assert!(FetchError::from_status(401, "").unwrap().is_auth_failure());
    }
}
