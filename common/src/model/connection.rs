//! Connection results: the summary embedded in a source row, the per-system
//! detail rows of a connection job, and the classification used by the
//! connection overlay.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lifecycle of the latest scan attempt against a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Created,
    Pending,
    Running,
    Completed,
    Failed,
    /// Any status this console does not know about yet.
    #[serde(other)]
    Unknown,
}

impl ConnectionStatus {
    /// True while the job has not finished.
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            ConnectionStatus::Created | ConnectionStatus::Pending | ConnectionStatus::Running
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Created => "Created",
            ConnectionStatus::Pending => "Pending",
            ConnectionStatus::Running => "Running",
            ConnectionStatus::Completed => "Success",
            ConnectionStatus::Failed => "Failed",
            ConnectionStatus::Unknown => "Unknown",
        }
    }
}

/// Snapshot of the most recent connection job for a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionSummary {
    pub id: u64,
    pub status: ConnectionStatus,
    #[serde(default)]
    pub report_id: Option<u64>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub systems_count: u64,
    #[serde(default)]
    pub systems_scanned: u64,
    #[serde(default)]
    pub systems_failed: u64,
    #[serde(default)]
    pub systems_unreachable: u64,
    #[serde(default)]
    pub system_fingerprint_count: u64,
    #[serde(default)]
    pub source_systems_count: u64,
    #[serde(default)]
    pub source_systems_scanned: u64,
    #[serde(default)]
    pub source_systems_failed: u64,
    #[serde(default)]
    pub source_systems_unreachable: u64,
    #[serde(default)]
    pub status_details: BTreeMap<String, String>,
}

impl ConnectionSummary {
    /// Timestamp shown next to the status: when a pending job started, or when
    /// a finished one ended.
    pub fn scan_time(&self) -> Option<&str> {
        let start = self.start_time.as_deref().filter(|_| self.status.is_pending());
        start.or(self.end_time.as_deref())
    }
}

/// Result of connecting to one system during a connection job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDetailItem {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    /// Raw status string. Kept as text so unknown values still get classified.
    pub status: String,
    #[serde(default)]
    pub source: Option<serde_json::Value>,
}

/// The three fixed groups of the connection overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Failed,
    UnreachableOrOther,
    Successful,
}

impl Bucket {
    /// Total classification of a system status. Anything that is neither
    /// `success` nor `failed` lands in [`Bucket::UnreachableOrOther`].
    pub fn classify(status: &str) -> Bucket {
        match status {
            "success" => Bucket::Successful,
            "failed" => Bucket::Failed,
            _ => Bucket::UnreachableOrOther,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Bucket::Failed => "Failed connections",
            Bucket::UnreachableOrOther => "Unreachable systems",
            Bucket::Successful => "Successful connections",
        }
    }
}

/// Connection detail items partitioned by [`Bucket`], preserving input order
/// inside each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionBuckets {
    pub failed: Vec<ConnectionDetailItem>,
    pub unreachable: Vec<ConnectionDetailItem>,
    pub successful: Vec<ConnectionDetailItem>,
}

impl ConnectionBuckets {
    pub fn partition<I>(items: I) -> Self
    where
        I: IntoIterator<Item = ConnectionDetailItem>,
    {
        let mut buckets = ConnectionBuckets::default();
        for item in items {
            match Bucket::classify(&item.status) {
                Bucket::Failed => buckets.failed.push(item),
                Bucket::UnreachableOrOther => buckets.unreachable.push(item),
                Bucket::Successful => buckets.successful.push(item),
            }
        }
        buckets
    }

    pub fn get(&self, bucket: Bucket) -> &[ConnectionDetailItem] {
        match bucket {
            Bucket::Failed => &self.failed,
            Bucket::UnreachableOrOther => &self.unreachable,
            Bucket::Successful => &self.successful,
        }
    }

    pub fn len(&self) -> usize {
        self.failed.len() + self.unreachable.len() + self.successful.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(status: ConnectionStatus) -> ConnectionSummary {
        serde_json::from_value(serde_json::json!({
            "id": 3,
            "status": status,
            "start_time": "2023-11-15T19:23:44.062270",
            "end_time": "2023-11-15T19:23:48.851240"
        }))
        .unwrap()
    }

    #[test]
    fn scan_time_depends_on_pending_state() {
        assert_eq!(
            summary(ConnectionStatus::Running).scan_time(),
            Some("2023-11-15T19:23:44.062270")
        );
        assert_eq!(
            summary(ConnectionStatus::Completed).scan_time(),
            Some("2023-11-15T19:23:48.851240")
        );
    }

    #[test]
    fn unknown_status_does_not_break_decoding() {
        let s: ConnectionSummary =
            serde_json::from_str(r#"{"id": 9, "status": "canceled"}"#).unwrap();
        assert_eq!(s.status, ConnectionStatus::Unknown);
        assert!(!s.status.is_pending());
    }
}
