use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Outcome category of a single monitored probe.
///
/// Wire representation is a small integer: `0 = Ok`, `1 = Warning`,
/// `2 = Error`. Anything else is uncategorized and deserializes to `None`
/// on the record rather than failing the whole fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Ok,
    Warning,
    Error,
}

impl Status {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Status::Ok),
            1 => Some(Status::Warning),
            2 => Some(Status::Error),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Error => 2,
        }
    }
}

/// Classified issue taxonomy attached to problematic probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueType {
    MissingParameter,
    RateLimitExceeded,
    NotFound,
    UnknownParameter,
    Deprecated,
    Unsecure,
}

impl IssueType {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(IssueType::MissingParameter),
            1 => Some(IssueType::RateLimitExceeded),
            2 => Some(IssueType::NotFound),
            3 => Some(IssueType::UnknownParameter),
            4 => Some(IssueType::Deprecated),
            5 => Some(IssueType::Unsecure),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            IssueType::MissingParameter => 0,
            IssueType::RateLimitExceeded => 1,
            IssueType::NotFound => 2,
            IssueType::UnknownParameter => 3,
            IssueType::Deprecated => 4,
            IssueType::Unsecure => 5,
        }
    }
}

/// One monitored request as delivered by the log endpoint.
///
/// Wire field names follow the endpoint's JSON shape (`issue_type`,
/// `response_time`, ...). Records are immutable once fetched; every query
/// stage copies survivors into a fresh sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Raw probed endpoint, may include query parameters.
    pub url: String,
    /// Categorized probe outcome; `None` when the wire value is missing
    /// or outside the defined set.
    #[serde(
        default,
        deserialize_with = "de_status",
        serialize_with = "ser_status"
    )]
    pub status: Option<Status>,
    #[serde(
        default,
        deserialize_with = "de_issue_type",
        serialize_with = "ser_issue_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub issue_type: Option<IssueType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_description: Option<String>,
    /// Milliseconds.
    pub response_time: u64,
}

impl LogRecord {
    /// Probe instant in milliseconds since the epoch. Range bounds are
    /// millisecond-resolution, records are second-resolution; the exact
    /// integer multiply keeps boundary records comparable without loss.
    pub fn timestamp_ms(&self) -> i64 {
        self.timestamp.saturating_mul(1000)
    }
}

// Wire form of both enums is the integer code. Filter specs deserialize
// strictly; tolerance for undefined codes applies only to fetched records,
// via the field-level deserializers below.
impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        Status::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("undefined status code {}", code)))
    }
}

impl Serialize for IssueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for IssueType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = i64::deserialize(deserializer)?;
        IssueType::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("undefined issue code {}", code)))
    }
}

fn de_status<'de, D>(deserializer: D) -> Result<Option<Status>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<i64>::deserialize(deserializer)?;
    Ok(code.and_then(Status::from_code))
}

fn ser_status<S>(status: &Option<Status>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match status {
        Some(s) => serializer.serialize_u8(s.code()),
        None => serializer.serialize_none(),
    }
}

fn de_issue_type<'de, D>(deserializer: D) -> Result<Option<IssueType>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = Option::<i64>::deserialize(deserializer)?;
    Ok(code.and_then(IssueType::from_code))
}

fn ser_issue_type<S>(issue: &Option<IssueType>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match issue {
        Some(i) => serializer.serialize_u8(i.code()),
        None => serializer.serialize_none(),
    }
}
