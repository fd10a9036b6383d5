//! The record fetch boundary: one GET against the log endpoint.
//!
//! No retries, no caching; a non-success status becomes a typed error
//! carrying the code. The engine consumes the already-resolved sequence.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::{LogboardError, LogboardResult};
use crate::record::LogRecord;

pub struct RecordFetcher {
    config: ApiConfig,
    client: reqwest::Client,
}

impl std::fmt::Debug for RecordFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordFetcher")
            .field("config", &self.config)
            .field("client", &"<reqwest::Client>")
            .finish()
    }
}

impl RecordFetcher {
    pub fn new(config: ApiConfig) -> LogboardResult<Self> {
        let mut builder = reqwest::ClientBuilder::new();
        if let Some(secs) = config.request_timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| LogboardError::fetch(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Fetch the full record list from the log endpoint.
    pub async fn fetch_records(&self) -> LogboardResult<Vec<LogRecord>> {
        debug!("Fetching log records from {}", self.config.endpoint);

        let response = self.client.get(&self.config.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LogboardError::fetch_status(
                status.as_u16(),
                &self.config.endpoint,
            ));
        }

        let records: Vec<LogRecord> = response.json().await?;
        info!(
            "Fetched {} log records from {}",
            records.len(),
            self.config.endpoint
        );
        Ok(records)
    }
}

/// Earliest and latest record timestamps (seconds), used to clamp the date
/// pickers. The fetch order is not trusted to be chronological.
pub fn entry_bounds(records: &[LogRecord]) -> Option<(i64, i64)> {
    let first = records.iter().map(|r| r.timestamp).min()?;
    let last = records.iter().map(|r| r.timestamp).max()?;
    Some((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Status;

    fn record(timestamp: i64) -> LogRecord {
        LogRecord {
            timestamp,
            url: "https://api.example.com/v1/ping".to_string(),
            status: Some(Status::Ok),
            issue_type: None,
            issue_description: None,
            response_time: 10,
        }
    }

    #[test]
    fn test_fetcher_creation() {
        let fetcher = RecordFetcher::new(ApiConfig::default()).unwrap();
        assert_eq!(fetcher.endpoint(), "http://localhost:3000/logs");
    }

    #[test]
    fn test_entry_bounds_ignores_fetch_order() {
        let records = vec![record(300), record(100), record(200)];
        assert_eq!(entry_bounds(&records), Some((100, 300)));
    }

    #[test]
    fn test_entry_bounds_empty() {
        assert_eq!(entry_bounds(&[]), None);
    }

    #[test]
    fn test_payload_decoding() {
        // The fetch path decodes through the same serde shape; exercise it
        // directly on a captured payload.
        let payload = r#"[
            {"timestamp": 1704067200, "url": "https://api.example.com/v1/users", "status": 0, "response_time": 42},
            {"timestamp": 1704070800, "url": "https://api.example.com/v1/users", "status": 2, "issue_type": 2, "issue_description": "Not found", "response_time": 120}
        ]"#;

        let records: Vec<LogRecord> = serde_json::from_str(payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].status, Some(Status::Error));
        assert_eq!(entry_bounds(&records), Some((1704067200, 1704070800)));
    }
}
