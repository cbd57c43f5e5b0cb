use crate::lookup::{BreachSource, LookupController};
use crate::report::ReportRenderer;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::layout::layout_regions;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Run the interactive UI until the user quits.
pub fn run<S: BreachSource>(
    controller: LookupController<S>,
    renderer: ReportRenderer,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let mut app = App::new(controller, renderer);
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| {
            let report = layout_regions(frame.area()).report;
            app.set_report_width(report.width.saturating_sub(2));
            draw(frame, &app);
        })?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => app.refresh(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => app.refresh(),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
