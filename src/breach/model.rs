use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// One breach a queried email address was found in.
///
/// Every field is optional on the wire; missing values fall back to
/// empty strings, empty lists, zero and `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BreachRecord {
    pub title: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub domain: String,
    /// Raw date string as sent by the service.
    #[serde(deserialize_with = "null_as_default")]
    pub breach_date: String,
    /// Untrusted HTML. Sanitize before display.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data_classes: Vec<String>,
    /// Any JSON number. Fractions are truncated, negatives read as zero.
    #[serde(deserialize_with = "count_from_number")]
    pub pwn_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub is_verified: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_sensitive: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn count_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<Number>::deserialize(deserializer)? else {
        return Ok(0);
    };
    if let Some(count) = number.as_u64() {
        return Ok(count);
    }
    Ok(match number.as_f64() {
        Some(f) if f.is_finite() && f > 0.0 => f.trunc() as u64,
        _ => 0,
    })
}

impl BreachRecord {
    /// Title when present and non-empty, otherwise the name.
    pub fn display_name(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => self.name.as_deref().unwrap_or_default(),
        }
    }

    /// Parse the breach date into a calendar date.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive
    /// `YYYY-MM-DDTHH:MM:SS` timestamps.
    pub fn parsed_breach_date(&self) -> Option<NaiveDate> {
        let raw = self.breach_date.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Some(ts.date_naive());
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|ts| ts.date())
    }
}

/// Response envelope of `GET /check-email/{email}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BreachResponse {
    #[serde(rename = "Error", default)]
    pub error: Option<Value>,
    #[serde(rename = "BreachDetails", default)]
    pub breach_details: Option<Vec<BreachRecord>>,
}

impl BreachResponse {
    /// Error message when the service flagged an error.
    ///
    /// Follows JSON truthiness: `null`, `false`, `0` and `""` do not count
    /// as an error.
    pub fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::Bool(true) => Some("error".to_string()),
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }

    /// The breach list, empty when absent or null.
    pub fn into_breaches(self) -> Vec<BreachRecord> {
        self.breach_details.unwrap_or_default()
    }
}

/// Classified result of one completed query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The address was queried and no breach matched.
    NoBreach,
    /// Matching breaches, never empty.
    Breaches(Vec<BreachRecord>),
    /// The service reported an error in an otherwise valid response.
    ApiError(String),
}

impl LookupOutcome {
    /// Build an outcome from a breach list, `NoBreach` when empty.
    pub fn from_breaches(breaches: Vec<BreachRecord>) -> Self {
        if breaches.is_empty() {
            Self::NoBreach
        } else {
            Self::Breaches(breaches)
        }
    }

    pub fn breach_count(&self) -> usize {
        match self {
            Self::Breaches(list) => list.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_defaults_missing_fields() {
        let record: BreachRecord = serde_json::from_str(r#"{"Name": "Adobe"}"#).unwrap();
        assert_eq!(record.display_name(), "Adobe");
        assert!(record.data_classes.is_empty());
        assert_eq!(record.pwn_count, 0);
        assert!(!record.is_verified);
        assert!(!record.is_sensitive);
    }

    #[test]
    fn record_treats_null_as_missing() {
        let record: BreachRecord =
            serde_json::from_str(r#"{"Name": "Adobe", "DataClasses": null, "Domain": null}"#)
                .unwrap();
        assert!(record.data_classes.is_empty());
        assert_eq!(record.domain, "");
    }

    #[test]
    fn pwn_count_accepts_any_number() {
        let count = |raw: &str| {
            let json = format!(r#"{{"BreachDetails":[{{"Name":"A","PwnCount":{raw}}}]}}"#);
            serde_json::from_str::<BreachResponse>(&json).unwrap().into_breaches()[0].pwn_count
        };
        assert_eq!(count("1234567.0"), 1_234_567);
        assert_eq!(count("42.9"), 42);
        assert_eq!(count("-5"), 0);
        assert_eq!(count("-3.5"), 0);
        assert_eq!(count("null"), 0);
        assert_eq!(count("152445165"), 152_445_165);
    }

    #[test]
    fn title_preferred_over_name() {
        let record = BreachRecord {
            title: Some("Adobe Systems".into()),
            name: Some("Adobe".into()),
            ..Default::default()
        };
        assert_eq!(record.display_name(), "Adobe Systems");

        let empty_title = BreachRecord {
            title: Some(String::new()),
            name: Some("Adobe".into()),
            ..Default::default()
        };
        assert_eq!(empty_title.display_name(), "Adobe");
    }

    #[test]
    fn breach_date_accepts_common_shapes() {
        let expected = NaiveDate::from_ymd_opt(2013, 10, 4);
        for raw in ["2013-10-04", "2013-10-04T00:00:00Z", "2013-10-04T12:30:00"] {
            let record = BreachRecord {
                breach_date: raw.into(),
                ..Default::default()
            };
            assert_eq!(record.parsed_breach_date(), expected, "{raw}");
        }

        let garbage = BreachRecord {
            breach_date: "sometime in 2013".into(),
            ..Default::default()
        };
        assert_eq!(garbage.parsed_breach_date(), None);
    }

    #[test]
    fn error_message_follows_truthiness() {
        let parse = |json: &str| serde_json::from_str::<BreachResponse>(json).unwrap();
        assert_eq!(parse(r#"{}"#).error_message(), None);
        assert_eq!(parse(r#"{"Error": null}"#).error_message(), None);
        assert_eq!(parse(r#"{"Error": ""}"#).error_message(), None);
        assert_eq!(parse(r#"{"Error": false}"#).error_message(), None);
        assert_eq!(
            parse(r#"{"Error": "not found"}"#).error_message(),
            Some("not found".to_string())
        );
    }

    #[test]
    fn null_breach_details_is_empty() {
        let response: BreachResponse =
            serde_json::from_str(r#"{"BreachDetails": null}"#).unwrap();
        assert!(response.into_breaches().is_empty());
    }

    #[test]
    fn outcome_from_empty_list_is_no_breach() {
        assert_eq!(LookupOutcome::from_breaches(Vec::new()), LookupOutcome::NoBreach);
        let one = LookupOutcome::from_breaches(vec![BreachRecord::default()]);
        assert_eq!(one.breach_count(), 1);
    }
}
