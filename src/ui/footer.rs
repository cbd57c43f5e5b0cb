use crate::report::footer_lines;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Enter: Check │ Ctrl-U: Clear │ ↑/↓ PgUp/PgDn: Scroll │ Esc: Quit";

pub struct Footer {
    year: i32,
}

impl Footer {
    pub fn new(year: i32) -> Self {
        Self { year }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let [copyright, powered_by] = footer_lines(self.year);
        let version = format!("v{} ", VERSION);

        // Char count, not byte count, for the box-drawing separators.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(HINTS.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let lines = vec![
            Line::from(vec![
                Span::styled(HINTS, text_style),
                Span::styled(" ".repeat(padding), text_style),
                Span::styled(version, text_style),
            ]),
            Line::from(format!(" {} · {}", copyright, powered_by)),
        ];

        Paragraph::new(lines)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
