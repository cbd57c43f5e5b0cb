use serde::Serialize;

use crate::breach::{BreachRecord, LookupOutcome};
use crate::config::DisplayConfig;
use crate::lookup::WorkflowState;
use crate::report::format::{breach_count_label, format_breach_date, format_count};
use crate::report::sanitize::{sanitize_html, strip_control, to_plain_text};

pub const NO_BREACH_HEADING: &str = "✅ Good News!";
pub const NO_BREACH_SUMMARY: &str = "No breaches found";
pub const NO_BREACH_BODY: &str = "Your email address was not found in any known data breaches. \
However, it's still important to maintain good security practices.";
pub const BREACH_HEADING: &str = "⚠️ Breach Alert";
pub const API_ERROR_HEADING: &str = "Lookup service error";

/// What the user sees for a given workflow state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedReport {
    /// Nothing submitted yet.
    Idle,
    /// A lookup is running.
    InProgress,
    /// The lookup failed.
    Error { message: String },
    /// The address is not in any known breach.
    NoBreaches {
        heading: String,
        summary: String,
        body: String,
    },
    /// The service reported an error (distinct API-error policy only).
    ApiError { heading: String, message: String },
    /// The address was found in one or more breaches.
    Breaches {
        heading: String,
        /// "1 data breach" / "N data breaches".
        count_label: String,
        entries: Vec<BreachEntry>,
    },
}

/// A breach record prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreachEntry {
    pub title: String,
    pub domain: String,
    pub breach_date: String,
    /// Sanitized HTML.
    pub description_html: String,
    /// Plain-text projection of `description_html`.
    pub description_text: String,
    pub data_classes: Vec<String>,
    pub pwn_count: u64,
    /// `pwn_count` with thousands separators.
    pub affected_accounts: String,
    pub verified: bool,
    pub sensitive: bool,
}

impl RenderedReport {
    /// "Found in 2 data breaches" for a breach report.
    pub fn summary_line(&self) -> Option<String> {
        match self {
            RenderedReport::Breaches { count_label, .. } => Some(format!("Found in {}", count_label)),
            _ => None,
        }
    }
}

/// Turns workflow state into a [`RenderedReport`].
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    date_format: String,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}

impl ReportRenderer {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            date_format: display.date_format.clone(),
        }
    }

    pub fn render(&self, state: &WorkflowState) -> RenderedReport {
        if state.is_loading {
            return RenderedReport::InProgress;
        }
        if let Some(message) = &state.transport_error {
            return RenderedReport::Error {
                message: message.clone(),
            };
        }
        if !state.has_completed_one_query {
            return RenderedReport::Idle;
        }

        match &state.last_outcome {
            None => RenderedReport::Idle,
            Some(LookupOutcome::NoBreach) => RenderedReport::NoBreaches {
                heading: NO_BREACH_HEADING.to_string(),
                summary: NO_BREACH_SUMMARY.to_string(),
                body: NO_BREACH_BODY.to_string(),
            },
            Some(LookupOutcome::ApiError(message)) => RenderedReport::ApiError {
                heading: API_ERROR_HEADING.to_string(),
                message: strip_control(message),
            },
            Some(LookupOutcome::Breaches(records)) => RenderedReport::Breaches {
                heading: BREACH_HEADING.to_string(),
                count_label: breach_count_label(records.len()),
                entries: records.iter().map(|r| self.entry(r)).collect(),
            },
        }
    }

    pub fn entry(&self, record: &BreachRecord) -> BreachEntry {
        let description_html = sanitize_html(&record.description);
        BreachEntry {
            title: strip_control(record.display_name()),
            domain: strip_control(&record.domain),
            breach_date: strip_control(&format_breach_date(record, &self.date_format)),
            description_text: to_plain_text(&description_html),
            description_html,
            data_classes: record.data_classes.iter().map(|c| strip_control(c)).collect(),
            pwn_count: record.pwn_count,
            affected_accounts: format_count(record.pwn_count),
            verified: record.is_verified,
            sensitive: record.is_sensitive,
        }
    }
}

/// Render with the default display settings.
pub fn render(state: &WorkflowState) -> RenderedReport {
    ReportRenderer::default().render(state)
}
