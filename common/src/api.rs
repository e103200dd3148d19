//! URLs of the discovery API endpoints used by the console.

use crate::model::source::SourceType;

/// Page size used when loading the systems of a connection job; the overlay
/// shows them all at once.
pub const CONNECTION_PAGE_SIZE: u32 = 1000;

/// Builds endpoint URLs from the configured API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// `GET` (paginated list) and `POST` (create) of sources.
    pub fn sources(&self) -> String {
        format!("{}/sources/", self.base)
    }

    pub fn credentials(&self) -> String {
        format!("{}/credentials/", self.base)
    }

    /// Credentials usable by sources of `source_type`.
    pub fn credentials_by_type(&self, source_type: SourceType) -> String {
        format!("{}/credentials/?cred_type={}", self.base, source_type.as_str())
    }

    /// Per-system results of connection job `job_id` for source `source_id`.
    pub fn connection(&self, job_id: u64, source_id: u64, page_size: u32) -> String {
        format!(
            "{}/jobs/{}/connection/?page=1&page-size={}&ordering=name&source_type={}",
            self.base, job_id, page_size, source_id
        )
    }

    pub fn token(&self) -> String {
        format!("{}/token/", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_ignore_trailing_slash_of_base() {
        let endpoints = Endpoints::new("https://0.0.0.0:9443/api/v1/");
        assert_eq!(endpoints.sources(), "https://0.0.0.0:9443/api/v1/sources/");
        assert_eq!(
            endpoints.credentials_by_type(SourceType::Vcenter),
            "https://0.0.0.0:9443/api/v1/credentials/?cred_type=vcenter"
        );
        assert_eq!(
            endpoints.connection(3, 2, CONNECTION_PAGE_SIZE),
            "https://0.0.0.0:9443/api/v1/jobs/3/connection/?page=1&page-size=1000&ordering=name&source_type=2"
        );
        assert_eq!(endpoints.token(), "https://0.0.0.0:9443/api/v1/token/");
    }
}
