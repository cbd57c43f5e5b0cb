use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Settings for talking to the breach lookup service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Base URL of the service; `/check-email/{email}` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds. No timeout when unset.
    #[serde(default)]
    pub request_timeout_seconds: Option<u32>,
    /// How an error flagged inside a successful response is reported.
    #[serde(default)]
    pub api_errors: ApiErrorPolicy,
}

/// Mapping applied when the service answers 2xx with an `Error` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorPolicy {
    /// Report the query as "no breaches found".
    #[default]
    NoBreach,
    /// Report the service error as its own outcome.
    Distinct,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// chrono strftime pattern for breach dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

pub const DEFAULT_BASE_URL: &str = "https://api.xposedornot.com/v1";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: None,
            api_errors: ApiErrorPolicy::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}
