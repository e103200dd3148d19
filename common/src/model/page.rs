use serde::{Deserialize, Serialize};

/// One page of a paginated collection endpoint.
///
/// Every list endpoint of the discovery API answers with this envelope. The
/// `count` is the total number of items across all pages, not the length of
/// `results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items matching the query. Some endpoints (credentials by
    /// type) omit it; it is then derived from `results`.
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(count: u64, results: Vec<T>) -> Self {
        Self {
            count: Some(count),
            next: None,
            previous: None,
            results,
        }
    }

    /// Total item count, falling back to the length of this page.
    pub fn total(&self) -> u64 {
        self.count.unwrap_or(self.results.len() as u64)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::new(0, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_falls_back_to_results_len() {
        let page: Page<u32> = serde_json::from_str(r#"{"results":[1,2,3]}"#).unwrap();
        assert_eq!(page.total(), 3);

        let page: Page<u32> = serde_json::from_str(r#"{"count":42,"results":[1]}"#).unwrap();
        assert_eq!(page.total(), 42);
    }
}
