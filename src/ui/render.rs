use crate::lookup::BreachSource;
use crate::report::{BreachEntry, RenderedReport, SECURITY_TIPS, TIPS_HEADING};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK, STATUS_WARN,
    TAG_BACKGROUND,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub const INPUT_PLACEHOLDER: &str = "you@example.com";
pub const LOADING_LABEL: &str = "Checking...";
pub const IDLE_HINT: &str = "Enter an email address and press Enter to check it.";

pub fn draw<S: BreachSource>(frame: &mut Frame<'_>, app: &App<S>) {
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(), regions.header);
    draw_input(frame, app, regions.input);

    frame.render_widget(Clear, regions.report);
    let report = Paragraph::new(report_lines(app.report(), app.spinner()))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0))
        .block(bordered(" Report "));
    frame.render_widget(report, regions.report);

    if regions.tips.width > 0 {
        let tips = Paragraph::new(tips_lines())
            .wrap(Wrap { trim: true })
            .block(bordered(&format!(" {} ", TIPS_HEADING)));
        frame.render_widget(tips, regions.tips);
    }

    let footer = Footer::new(app.year());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}

fn draw_input<S: BreachSource>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let field = app.email_field();
    let (visible, cursor_col) =
        input_window(&field.value, field.cursor, area.width.saturating_sub(2));
    let line = if app.is_loading() {
        Line::from(Span::styled(
            format!("{} {}", app.spinner(), LOADING_LABEL),
            Style::default().fg(ACCENT),
        ))
    } else if field.value.is_empty() {
        Line::from(Span::styled(INPUT_PLACEHOLDER, Style::default().fg(MUTED_TEXT)))
    } else {
        Line::from(Span::styled(visible, Style::default().fg(HEADER_TEXT)))
    };

    let border_color = if app.is_loading() { GLOBAL_BORDER } else { ACCENT };
    let input = Paragraph::new(line).block(
        Block::default()
            .title(" Email address ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(input, area);

    if !app.is_loading() && area.width > 2 && area.height > 2 {
        frame.set_cursor_position((area.x + 1 + cursor_col, area.y + 1));
    }
}

/// Slice of `value` that fits in `width` columns with the cursor in view,
/// and the cursor column within that slice.
fn input_window(value: &str, cursor: usize, width: u16) -> (String, u16) {
    if width == 0 {
        return (String::new(), 0);
    }
    let width = usize::from(width);
    let offset = cursor.saturating_sub(width - 1);
    let visible = value.chars().skip(offset).take(width).collect();
    (visible, (cursor - offset) as u16)
}

fn bordered(title: &str) -> Block<'static> {
    Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

/// Lines for the report pane.
pub fn report_lines(report: &RenderedReport, spinner: &str) -> Vec<Line<'static>> {
    let muted = Style::default().fg(MUTED_TEXT);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    match report {
        RenderedReport::Idle => vec![Line::from(Span::styled(IDLE_HINT, muted))],
        RenderedReport::InProgress => vec![Line::from(Span::styled(
            format!("{} {}", spinner, LOADING_LABEL),
            Style::default().fg(ACCENT),
        ))],
        RenderedReport::Error { message } => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(STATUS_ERROR),
        ))],
        RenderedReport::NoBreaches {
            heading,
            summary,
            body,
        } => vec![
            Line::from(Span::styled(heading.clone(), bold.fg(STATUS_OK))),
            Line::from(summary.clone()),
            Line::default(),
            Line::from(Span::styled(body.clone(), muted)),
        ],
        RenderedReport::ApiError { heading, message } => vec![
            Line::from(Span::styled(heading.clone(), bold.fg(STATUS_WARN))),
            Line::from(message.clone()),
        ],
        RenderedReport::Breaches {
            heading, entries, ..
        } => {
            let mut lines = vec![Line::from(Span::styled(
                heading.clone(),
                bold.fg(STATUS_ERROR),
            ))];
            if let Some(summary) = report.summary_line() {
                lines.push(Line::from(summary));
            }
            for entry in entries {
                lines.push(Line::default());
                push_entry(&mut lines, entry);
            }
            lines
        }
    }
}

/// Rows the report occupies when wrapped to `width` columns.
///
/// Counts character wrapping; word wrapping can add a few rows on top.
pub fn report_height(report: &RenderedReport, width: u16) -> usize {
    let lines = report_lines(report, "");
    if width == 0 {
        return lines.len();
    }
    let width = usize::from(width);
    lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum()
}

fn push_entry(lines: &mut Vec<Line<'static>>, entry: &BreachEntry) {
    let muted = Style::default().fg(MUTED_TEXT);

    let mut title = vec![Span::styled(
        entry.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if !entry.domain.is_empty() {
        title.push(Span::styled(format!("  {}", entry.domain), muted));
    }
    lines.push(Line::from(title));
    lines.push(Line::from(Span::styled(
        format!("Breach Date: {}", entry.breach_date),
        muted,
    )));

    for text in entry.description_text.lines() {
        lines.push(Line::from(text.to_string()));
    }

    if !entry.data_classes.is_empty() {
        let mut tags = vec![Span::styled("Exposed: ", muted)];
        for class in &entry.data_classes {
            tags.push(Span::styled(
                format!(" {} ", class),
                Style::default().bg(TAG_BACKGROUND),
            ));
            tags.push(Span::raw(" "));
        }
        lines.push(Line::from(tags));
    }

    let mut stats = vec![Span::raw(format!(
        "👥 {} affected accounts",
        entry.affected_accounts
    ))];
    if entry.verified {
        stats.push(Span::styled("  ✅ Verified", Style::default().fg(STATUS_OK)));
    }
    if entry.sensitive {
        stats.push(Span::styled("  ⚠️ Sensitive", Style::default().fg(STATUS_WARN)));
    }
    lines.push(Line::from(stats));
}

fn tips_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, tip) in SECURITY_TIPS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            format!("{} {}", tip.icon, tip.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            tip.description,
            Style::default().fg(MUTED_TEXT),
        )));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn idle_shows_hint() {
        assert_eq!(text(&report_lines(&RenderedReport::Idle, "⠋")), vec![IDLE_HINT]);
    }

    #[test]
    fn in_progress_shows_spinner() {
        let lines = text(&report_lines(&RenderedReport::InProgress, "⠙"));
        assert_eq!(lines, vec!["⠙ Checking..."]);
    }

    #[test]
    fn breach_entry_lines() {
        let report = RenderedReport::Breaches {
            heading: "⚠️ Breach Alert".into(),
            count_label: "1 data breach".into(),
            entries: vec![BreachEntry {
                title: "Adobe".into(),
                domain: "adobe.com".into(),
                breach_date: "10/4/2013".into(),
                description_html: "Leak".into(),
                description_text: "Leak".into(),
                data_classes: vec!["Emails".into()],
                pwn_count: 1_234_567,
                affected_accounts: "1,234,567".into(),
                verified: true,
                sensitive: false,
            }],
        };
        let lines = text(&report_lines(&report, "⠋"));
        assert_eq!(lines[1], "Found in 1 data breach");
        assert_eq!(lines[3], "Adobe  adobe.com");
        assert_eq!(lines[4], "Breach Date: 10/4/2013");
        assert_eq!(lines[5], "Leak");
        assert_eq!(lines[6], "Exposed:  Emails  ");
        assert_eq!(lines[7], "👥 1,234,567 affected accounts  ✅ Verified");
    }

    #[test]
    fn input_window_follows_cursor() {
        assert_eq!(input_window("a@b.io", 6, 20), ("a@b.io".to_string(), 6));

        let long = "someone.with.a.long.name@example.com";
        let (visible, col) = input_window(long, long.len(), 10);
        assert_eq!(visible, "ample.com");
        assert_eq!(col, 9);

        let (visible, col) = input_window(long, 3, 10);
        assert_eq!(visible, "someone.wi");
        assert_eq!(col, 3);

        assert_eq!(input_window(long, 5, 0), (String::new(), 0));
    }

    #[test]
    fn report_height_counts_wrapped_rows() {
        assert_eq!(report_height(&RenderedReport::Idle, 0), 1);
        assert_eq!(report_height(&RenderedReport::Idle, 200), 1);
        let rows = IDLE_HINT.chars().count().div_ceil(10);
        assert_eq!(report_height(&RenderedReport::Idle, 10), rows);
    }

    #[test]
    fn tips_cover_every_tip() {
        let lines = tips_lines();
        assert_eq!(lines.len(), SECURITY_TIPS.len() * 3 - 1);
    }
}
