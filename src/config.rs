//! Configuration for the dashboard backend-for-frontend.
//!
//! TOML files with `${VAR}` / `${VAR:-default}` environment expansion,
//! post-load defaults, and validation.

use std::env;
use std::path::Path;

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{LogboardError, LogboardResult};
use crate::query::range::DateRange;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Log endpoint settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Query/view defaults
    #[serde(default)]
    pub query: QueryConfig,
    /// Rendering settings
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL returning the JSON array of log records.
    pub endpoint: String,
    /// Whole-request timeout in seconds.
    pub request_timeout: Option<u64>,
    /// Connect timeout in seconds.
    pub connect_timeout: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3000/logs".to_string(),
            request_timeout: Some(30),
            connect_timeout: Some(10),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct QueryConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Default window start, `YYYY-MM-DD`, interpreted at the display
    /// offset; start of day.
    pub default_start_date: Option<String>,
    /// Default window end, `YYYY-MM-DD`; end of day (23:59:59.999).
    pub default_end_date: Option<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            page_size_options: vec![10, 25, 50],
            default_start_date: None,
            default_end_date: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// UTC offset in minutes used for day bucketing and date parsing.
    pub utc_offset_minutes: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
        }
    }
}

impl Config {
    /// Load configuration from file with environment variable expansion
    pub async fn from_file_with_env<P: AsRef<Path>>(path: P) -> LogboardResult<Self> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;

        let expanded_content = expand_env_vars(&content);

        let mut config: Config = toml::from_str(&expanded_content)?;

        config.apply_defaults();
        config.validate()?;

        info!("Configuration loaded from {:?}", path.as_ref());
        Ok(config)
    }

    /// Apply default values where needed
    fn apply_defaults(&mut self) {
        if self.api.request_timeout.is_none() {
            self.api.request_timeout = Some(30);
        }
        if self.api.connect_timeout.is_none() {
            self.api.connect_timeout = Some(10);
        }
        if self.query.page_size_options.is_empty() {
            self.query.page_size_options = vec![10, 25, 50];
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> LogboardResult<()> {
        if self.api.endpoint.is_empty() {
            return Err(LogboardError::config("api.endpoint must not be empty"));
        }
        if !self.api.endpoint.starts_with("http://") && !self.api.endpoint.starts_with("https://") {
            return Err(LogboardError::config(format!(
                "api.endpoint must be an http(s) URL, got '{}'",
                self.api.endpoint
            )));
        }

        if self.query.default_page_size == 0 {
            return Err(LogboardError::config(
                "query.default_page_size must be positive",
            ));
        }
        if self.query.page_size_options.iter().any(|&size| size == 0) {
            return Err(LogboardError::config(
                "query.page_size_options must all be positive",
            ));
        }
        if !self
            .query
            .page_size_options
            .contains(&self.query.default_page_size)
        {
            return Err(LogboardError::config(format!(
                "query.default_page_size {} is not one of the page_size_options",
                self.query.default_page_size
            )));
        }

        // chrono rejects offsets outside +/-24h; real zones stay within 14.
        if self.display.utc_offset_minutes.abs() > 14 * 60 {
            return Err(LogboardError::config(format!(
                "display.utc_offset_minutes {} is outside +/-840",
                self.display.utc_offset_minutes
            )));
        }

        Ok(())
    }

    /// The fixed offset used for day bucketing.
    pub fn display_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.display.utc_offset_minutes * 60)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"))
    }

    /// The configured default date window as millisecond instants at the
    /// display offset. Absent dates leave that side unbounded.
    pub fn default_date_range(&self) -> LogboardResult<DateRange> {
        let offset = self.display_offset();

        let start = match &self.query.default_start_date {
            Some(date) => Some(day_boundary_ms(date, offset, false)?),
            None => None,
        };
        let end = match &self.query.default_end_date {
            Some(date) => Some(day_boundary_ms(date, offset, true)?),
            None => None,
        };

        Ok(DateRange::new(start, end))
    }
}

/// Millisecond instant of a day's start or end (23:59:59.999) at `offset`.
fn day_boundary_ms(date: &str, offset: FixedOffset, end_of_day: bool) -> LogboardResult<i64> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| LogboardError::config(format!("invalid date '{}': {}", date, e)))?;

    let time = if end_of_day {
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid time")
    } else {
        NaiveTime::from_hms_opt(0, 0, 0).expect("valid time")
    };

    let local = offset
        .from_local_datetime(&day.and_time(time))
        .single()
        .ok_or_else(|| LogboardError::config(format!("ambiguous local datetime for '{}'", date)))?;

    Ok(local.timestamp_millis())
}

fn expand_env_vars(content: &str) -> String {
    let mut result = content.to_string();

    // Replacement for ${VAR} and ${VAR:-default}
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_expr = &result[start + 2..start + end];
            let replacement = if let Some(default_pos) = var_expr.find(":-") {
                let var_name = &var_expr[..default_pos];
                let default_value = &var_expr[default_pos + 2..];
                env::var(var_name).unwrap_or_else(|_| default_value.to_string())
            } else {
                env::var(var_expr).unwrap_or_else(|_| {
                    warn!(
                        "Environment variable '{}' not found, using empty string",
                        var_expr
                    );
                    String::new()
                })
            };

            result.replace_range(start..start + end + 1, &replacement);
        } else {
            break; // Malformed ${VAR expression
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_validate() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.query.default_page_size, 10);
        assert_eq!(config.query.page_size_options, vec![10, 25, 50]);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.api.endpoint = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.api.endpoint = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.query.default_page_size = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.query.default_page_size = 33;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.display.utc_offset_minutes = 15 * 60;
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_from_file_with_env() {
        std::env::set_var("LOGBOARD_TEST_ENDPOINT", "https://logs.example.com/api");

        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[api]
endpoint = "${{LOGBOARD_TEST_ENDPOINT}}"

[query]
default_page_size = 25
page_size_options = [10, 25, 50]

[display]
utc_offset_minutes = ${{LOGBOARD_TEST_OFFSET:-0}}
"#
        )
        .unwrap();

        let config = Config::from_file_with_env(file.path()).await.unwrap();
        assert_eq!(config.api.endpoint, "https://logs.example.com/api");
        assert_eq!(config.query.default_page_size, 25);
        assert_eq!(config.display.utc_offset_minutes, 0);
        assert_eq!(config.api.request_timeout, Some(30));
    }

    #[tokio::test]
    async fn test_from_file_rejects_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[api]
endpoint = "https://logs.example.com/api"

[query]
default_page_size = 7
"#
        )
        .unwrap();

        let result = Config::from_file_with_env(file.path()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_default_date_range() {
        let mut config = Config::default();
        config.query.default_start_date = Some("2024-01-01".to_string());
        config.query.default_end_date = Some("2024-01-31".to_string());

        let range = config.default_date_range().unwrap();
        assert_eq!(range.start, Some(1_704_067_200_000));
        // End of day: 2024-01-31T23:59:59.999Z
        assert_eq!(range.end, Some(1_706_745_599_999));

        // A record at the very end of the window survives.
        assert!(range.contains(1_706_745_599));
    }

    #[test]
    fn test_default_date_range_unbounded() {
        let config = Config::default();
        let range = config.default_date_range().unwrap();
        assert_eq!(range, DateRange::default());
    }

    #[test]
    fn test_default_date_range_rejects_garbage() {
        let mut config = Config::default();
        config.query.default_start_date = Some("January 1st".to_string());
        assert!(config.default_date_range().is_err());
    }
}
