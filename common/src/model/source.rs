//! Discovery sources: the scan targets registered in the backend.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::model::connection::ConnectionSummary;
use crate::model::credential::CredentialRef;

/// Kind of target a source points at. Serialized in lowercase, exactly as the
/// backend expects it in `source_type` fields and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Network,
    Vcenter,
    Satellite,
    Openshift,
    Ansible,
    Acs,
}

impl SourceType {
    pub const ALL: [SourceType; 6] = [
        SourceType::Network,
        SourceType::Vcenter,
        SourceType::Satellite,
        SourceType::Openshift,
        SourceType::Ansible,
        SourceType::Acs,
    ];

    /// Value used on the wire and in query filters.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::Network => "network",
            SourceType::Vcenter => "vcenter",
            SourceType::Satellite => "satellite",
            SourceType::Openshift => "openshift",
            SourceType::Ansible => "ansible",
            SourceType::Acs => "acs",
        }
    }

    /// Human readable label shown in the type column and the add menu.
    pub fn label(self) -> &'static str {
        match self {
            SourceType::Network => "Network",
            SourceType::Vcenter => "vCenter Server",
            SourceType::Satellite => "Satellite",
            SourceType::Openshift => "OpenShift",
            SourceType::Ansible => "Ansible Controller",
            SourceType::Acs => "ACS",
        }
    }

    /// Parses the wire value. Case-insensitive; a label's first word
    /// ("vCenter Server" -> "vcenter") is accepted too.
    pub fn parse(value: &str) -> Option<SourceType> {
        let first = value.split_whitespace().next()?.to_lowercase();
        SourceType::ALL.into_iter().find(|t| t.as_str() == first)
    }

    /// Port suggested in the add form when the user leaves it empty.
    pub fn default_port(self) -> u16 {
        match self {
            SourceType::Network => 22,
            _ => 443,
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A configured discovery target as returned by `GET /sources/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: u64,
    pub name: String,
    pub source_type: SourceType,
    #[serde(default)]
    pub hosts: Vec<String>,
    #[serde(default)]
    pub port: Option<u16>,
    /// Protocol specific options (`ssl_cert_verify`, `use_paramiko`, ...).
    #[serde(default)]
    pub options: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub credentials: Vec<CredentialRef>,
    /// Outcome of the most recent scan against this source, if any.
    #[serde(default)]
    pub connection: Option<ConnectionSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::connection::ConnectionStatus;

    #[test]
    fn parse_accepts_wire_values_and_labels() {
        assert_eq!(SourceType::parse("network"), Some(SourceType::Network));
        assert_eq!(SourceType::parse("vCenter Server"), Some(SourceType::Vcenter));
        assert_eq!(SourceType::parse("OpenShift"), Some(SourceType::Openshift));
        assert_eq!(SourceType::parse("mainframe"), None);
        assert_eq!(SourceType::parse(""), None);
    }

    #[test]
    fn decodes_backend_source() {
        let json = r#"{
            "id": 1,
            "name": "Peripherals",
            "source_type": "openshift",
            "port": 443,
            "hosts": ["4444"],
            "options": {"ssl_protocol": "SSLv23", "ssl_cert_verify": true},
            "credentials": [{"id": 1, "name": "Peripherals"}],
            "connection": {
                "id": 1,
                "start_time": "2023-11-15T18:18:31.562241",
                "end_time": "2023-11-15T18:18:31.636013",
                "systems_count": 1,
                "systems_scanned": 0,
                "systems_failed": 0,
                "systems_unreachable": 1,
                "status_details": {"job_status_message": "The following tasks failed: 1"},
                "status": "failed",
                "source_systems_count": 1,
                "source_systems_scanned": 0,
                "source_systems_failed": 0,
                "source_systems_unreachable": 1
            }
        }"#;
        let source: Source = serde_json::from_str(json).unwrap();
        assert_eq!(source.source_type, SourceType::Openshift);
        assert_eq!(source.credentials[0].name, "Peripherals");
        let connection = source.connection.unwrap();
        assert_eq!(connection.status, ConnectionStatus::Failed);
        assert_eq!(connection.source_systems_unreachable, 1);
    }
}
