use crate::lookup::BreachSource;
use crate::ui::app::App;
use crate::ui::email_field::EmailFieldIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE_SCROLL: i32 = 10;

pub fn handle_key<S: BreachSource>(app: &mut App<S>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'u') {
        app.edit(EmailFieldIntent::Clear);
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Up => app.scroll_by(-1),
        KeyCode::Down => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_by(-PAGE_SCROLL),
        KeyCode::PageDown => app.scroll_by(PAGE_SCROLL),
        KeyCode::Backspace => app.edit(EmailFieldIntent::Backspace),
        KeyCode::Delete => app.edit(EmailFieldIntent::Delete),
        KeyCode::Left => app.edit(EmailFieldIntent::MoveLeft),
        KeyCode::Right => app.edit(EmailFieldIntent::MoveRight),
        KeyCode::Home => app.edit(EmailFieldIntent::MoveHome),
        KeyCode::End => app.edit(EmailFieldIntent::MoveEnd),
        KeyCode::Char(c) if !has_command_modifier(key) => app.edit(EmailFieldIntent::Insert(c)),
        _ => {}
    }
}

pub fn handle_paste<S: BreachSource>(app: &mut App<S>, text: String) {
    app.edit(EmailFieldIntent::Paste(text));
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
