use breachwatch::breach::{BreachRecord, LookupOutcome};
use breachwatch::config::DisplayConfig;
use breachwatch::lookup::WorkflowState;
use breachwatch::report::{
    format_report, render, sanitize_html, RenderedReport, ReportRenderer, NO_BREACH_HEADING,
};

fn completed(outcome: LookupOutcome) -> WorkflowState {
    WorkflowState {
        email_input: "jane@example.com".into(),
        has_completed_one_query: true,
        last_outcome: Some(outcome),
        generation: 1,
        ..Default::default()
    }
}

fn record(description: &str) -> BreachRecord {
    BreachRecord {
        title: Some("Example".into()),
        domain: "example.com".into(),
        breach_date: "2020-02-29".into(),
        description: description.into(),
        data_classes: vec!["Email addresses".into()],
        pwn_count: 1_234_567,
        is_verified: false,
        is_sensitive: true,
        ..Default::default()
    }
}

#[test]
fn test_description_script_is_stripped() {
    let state = completed(LookupOutcome::Breaches(vec![record(
        r#"<p>Leaked <a href="https://example.com" onclick="steal()">data</a></p><script>alert(1)</script>"#,
    )]));

    match render(&state) {
        RenderedReport::Breaches { entries, .. } => {
            let html = &entries[0].description_html;
            assert!(!html.contains("script"));
            assert!(!html.contains("alert"));
            assert!(!html.contains("onclick"));
            assert!(html.contains(r#"href="https://example.com""#));
            assert_eq!(entries[0].description_text, "Leaked data");
        }
        other => panic!("Expected Breaches, got {:?}", other),
    }
}

#[test]
fn test_javascript_links_are_neutralized() {
    let html = sanitize_html(r#"<a href="javascript:alert(1)">click</a>"#);
    assert!(!html.contains("javascript"));
    assert!(html.contains("click"));
}

#[test]
fn test_control_sequences_never_reach_text_output() {
    let hostile = BreachRecord {
        title: Some("Evil\u{1b}]0;pwned\u{7}".into()),
        domain: "x\u{1b}[2Jy".into(),
        data_classes: vec!["Emails\u{1b}[8m".into()],
        ..record("safe &#27;[31mred&#27;[0m text \u{1b}[5m")
    };
    let state = completed(LookupOutcome::Breaches(vec![hostile]));

    let text = format_report(&render(&state));
    assert!(!text.contains('\u{1b}'), "ESC in output: {text:?}");
    assert!(!text.contains('\u{7}'));
    assert!(text.contains("Evil]0;pwned"));
    assert!(text.contains("safe [31mred[0m text [5m"));
}

#[test]
fn test_counts_and_flags() {
    let state = completed(LookupOutcome::Breaches(vec![record("x")]));

    match render(&state) {
        RenderedReport::Breaches { entries, .. } => {
            assert_eq!(entries[0].affected_accounts, "1,234,567");
            assert!(!entries[0].verified);
            assert!(entries[0].sensitive);
            assert_eq!(entries[0].breach_date, "2/29/2020");
        }
        other => panic!("Expected Breaches, got {:?}", other),
    }
}

#[test]
fn test_custom_date_format() {
    let renderer = ReportRenderer::new(&DisplayConfig {
        date_format: "%B %-d, %Y".into(),
    });
    let entry = renderer.entry(&record("x"));
    assert_eq!(entry.breach_date, "February 29, 2020");
}

#[test]
fn test_no_breach_text_output() {
    let text = format_report(&render(&completed(LookupOutcome::NoBreach)));
    assert!(text.starts_with(NO_BREACH_HEADING));
    assert!(text.contains("No breaches found"));
}

#[test]
fn test_sensitive_flag_in_text_output() {
    let state = completed(LookupOutcome::Breaches(vec![record("x"), record("y")]));
    let text = format_report(&render(&state));
    assert!(text.contains("Found in 2 data breaches"));
    assert!(text.contains("⚠️ Sensitive"));
    assert!(!text.contains("Verified"));
}

#[test]
fn test_json_report_shape() {
    let state = completed(LookupOutcome::Breaches(vec![record("<b>x</b>")]));
    let json = serde_json::to_value(render(&state)).unwrap();

    assert_eq!(json["kind"], "breaches");
    assert_eq!(json["count_label"], "1 data breach");
    assert_eq!(json["entries"][0]["pwn_count"], 1_234_567);
    assert_eq!(json["entries"][0]["description_html"], "<b>x</b>");
}
