//! Report rendering.
//!
//! Turns a [`WorkflowState`](crate::lookup::WorkflowState) snapshot into
//! a display-ready [`RenderedReport`] and presents it as text.

mod format;
mod render;
mod sanitize;
mod text;
mod tips;

pub use format::{breach_count_label, current_year, footer_lines, format_breach_date, format_count};
pub use render::{
    render, BreachEntry, RenderedReport, ReportRenderer, API_ERROR_HEADING, BREACH_HEADING,
    NO_BREACH_BODY, NO_BREACH_HEADING, NO_BREACH_SUMMARY,
};
pub use sanitize::{sanitize_html, strip_control, to_plain_text};
pub use text::{format_footer, format_report, format_tips};
pub use tips::{SecurityTip, SECURITY_TIPS, TIPS_HEADING};
