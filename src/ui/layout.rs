use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    pub report: Rect,
    pub tips: Rect,
    pub footer: Rect,
}

/// Width below which the tips pane is hidden.
const TIPS_MIN_TOTAL_WIDTH: u16 = 90;
const TIPS_WIDTH: u16 = 38;

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 4.min(area.height.saturating_sub(header_height));
    let input_height = 3.min(area.height.saturating_sub(header_height + footer_height));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height),
            Constraint::Length(input_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);

    let body = rows[2];
    let (report, tips) = if body.width >= TIPS_MIN_TOTAL_WIDTH {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(TIPS_WIDTH)])
            .split(body);
        (cols[0], cols[1])
    } else {
        (
            body,
            Rect {
                x: body.x + body.width,
                y: body.y,
                width: 0,
                height: 0,
            },
        )
    };

    Regions {
        header: rows[0],
        input: rows[1],
        report,
        tips,
        footer: rows[3],
    }
}
