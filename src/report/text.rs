//! Plain-text presentation of reports for the `check` command.

use std::fmt::Write;

use crate::report::format::footer_lines;
use crate::report::render::RenderedReport;
use crate::report::tips::{SECURITY_TIPS, TIPS_HEADING};

/// Format a report as indented plain text.
pub fn format_report(report: &RenderedReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &RenderedReport) -> std::fmt::Result {
    match report {
        RenderedReport::Idle => {}
        RenderedReport::InProgress => writeln!(out, "Checking...")?,
        RenderedReport::Error { message } => writeln!(out, "{}", message)?,
        RenderedReport::NoBreaches {
            heading,
            summary,
            body,
        } => {
            writeln!(out, "{}", heading)?;
            writeln!(out, "{}", summary)?;
            writeln!(out)?;
            writeln!(out, "{}", body)?;
        }
        RenderedReport::ApiError { heading, message } => {
            writeln!(out, "{}", heading)?;
            writeln!(out, "{}", message)?;
        }
        RenderedReport::Breaches {
            heading, entries, ..
        } => {
            writeln!(out, "{}", heading)?;
            if let Some(summary) = report.summary_line() {
                writeln!(out, "{}", summary)?;
            }
            for entry in entries {
                writeln!(out)?;
                writeln!(out, "{}", entry.title)?;
                if !entry.domain.is_empty() {
                    writeln!(out, "  Domain: {}", entry.domain)?;
                }
                writeln!(out, "  Breach Date: {}", entry.breach_date)?;
                for line in entry.description_text.lines() {
                    writeln!(out, "  {}", line)?;
                }
                if !entry.data_classes.is_empty() {
                    writeln!(out, "  Exposed: {}", entry.data_classes.join(", "))?;
                }
                let mut stats = format!("  👥 {} affected accounts", entry.affected_accounts);
                if entry.verified {
                    stats.push_str("  ✅ Verified");
                }
                if entry.sensitive {
                    stats.push_str("  ⚠️ Sensitive");
                }
                writeln!(out, "{}", stats)?;
            }
        }
    }
    Ok(())
}

/// The security tips section.
pub fn format_tips() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", TIPS_HEADING);
    for tip in SECURITY_TIPS {
        let _ = writeln!(out, "{} {}", tip.icon, tip.title);
        let _ = writeln!(out, "   {}", tip.description);
    }
    out
}

pub fn format_footer(year: i32) -> String {
    footer_lines(year).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::render::BreachEntry;

    fn entry(title: &str) -> BreachEntry {
        BreachEntry {
            title: title.into(),
            domain: "example.com".into(),
            breach_date: "1/2/2020".into(),
            description_html: "<b>Leak</b>".into(),
            description_text: "Leak".into(),
            data_classes: vec!["Emails".into(), "Passwords".into()],
            pwn_count: 1_234_567,
            affected_accounts: "1,234,567".into(),
            verified: true,
            sensitive: false,
        }
    }

    #[test]
    fn breach_report_lists_entries_in_order() {
        let report = RenderedReport::Breaches {
            heading: "⚠️ Breach Alert".into(),
            count_label: "2 data breaches".into(),
            entries: vec![entry("First"), entry("Second")],
        };
        let text = format_report(&report);
        assert!(text.contains("Found in 2 data breaches"));
        assert!(text.contains("1,234,567 affected accounts"));
        assert!(text.contains("✅ Verified"));
        assert!(!text.contains("Sensitive"));
        assert!(text.find("First").unwrap() < text.find("Second").unwrap());
    }

    #[test]
    fn idle_report_is_empty() {
        assert_eq!(format_report(&RenderedReport::Idle), "");
    }

    #[test]
    fn tips_list_all_entries() {
        let text = format_tips();
        assert_eq!(text.lines().count(), 1 + SECURITY_TIPS.len() * 2);
        assert!(text.contains("Enable 2FA"));
    }
}
