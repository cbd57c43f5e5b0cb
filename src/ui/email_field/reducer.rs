//! Reducer for the email field.

use crate::mvi::Reducer;

use super::intent::EmailFieldIntent;
use super::state::EmailFieldState;

/// Reducer for email field edits.
pub struct EmailFieldReducer;

impl Reducer for EmailFieldReducer {
    type State = EmailFieldState;
    type Intent = EmailFieldIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EmailFieldIntent::Insert(c) => {
                if !c.is_control() {
                    let at = state.cursor_byte();
                    state.value.insert(at, c);
                    state.cursor += 1;
                }
                state
            }

            EmailFieldIntent::Paste(text) => {
                let text: String = text.chars().filter(|c| !c.is_control()).collect();
                let at = state.cursor_byte();
                state.value.insert_str(at, &text);
                state.cursor += text.chars().count();
                state
            }

            EmailFieldIntent::Backspace => {
                if state.cursor > 0 {
                    state.cursor -= 1;
                    let at = state.cursor_byte();
                    state.value.remove(at);
                }
                state
            }

            EmailFieldIntent::Delete => {
                if state.cursor < state.char_len() {
                    let at = state.cursor_byte();
                    state.value.remove(at);
                }
                state
            }

            EmailFieldIntent::MoveLeft => EmailFieldState {
                cursor: state.cursor.saturating_sub(1),
                ..state
            },

            EmailFieldIntent::MoveRight => {
                let cursor = (state.cursor + 1).min(state.char_len());
                EmailFieldState { cursor, ..state }
            }

            EmailFieldIntent::MoveHome => EmailFieldState { cursor: 0, ..state },

            EmailFieldIntent::MoveEnd => {
                let cursor = state.char_len();
                EmailFieldState { cursor, ..state }
            }

            EmailFieldIntent::Clear => EmailFieldState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> EmailFieldState {
        text.chars().fold(EmailFieldState::default(), |state, c| {
            EmailFieldReducer::reduce(state, EmailFieldIntent::Insert(c))
        })
    }

    #[test]
    fn typing_appends_and_moves_cursor() {
        let state = typed("a@b.c");
        assert_eq!(state.value, "a@b.c");
        assert_eq!(state.cursor, 5);
    }

    #[test]
    fn insert_in_the_middle() {
        let state = EmailFieldReducer::reduce(typed("ac"), EmailFieldIntent::MoveLeft);
        let state = EmailFieldReducer::reduce(state, EmailFieldIntent::Insert('b'));
        assert_eq!(state.value, "abc");
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let state = EmailFieldReducer::reduce(typed("ab"), EmailFieldIntent::MoveHome);
        let state = EmailFieldReducer::reduce(state, EmailFieldIntent::Backspace);
        assert_eq!(state.value, "ab");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn delete_removes_under_cursor() {
        let state = EmailFieldReducer::reduce(typed("ab"), EmailFieldIntent::MoveHome);
        let state = EmailFieldReducer::reduce(state, EmailFieldIntent::Delete);
        assert_eq!(state.value, "b");
    }

    #[test]
    fn backspace_handles_multibyte() {
        let state = EmailFieldReducer::reduce(typed("jé"), EmailFieldIntent::Backspace);
        assert_eq!(state.value, "j");
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn paste_drops_newlines() {
        let state = EmailFieldReducer::reduce(
            EmailFieldState::default(),
            EmailFieldIntent::Paste("jane@example.com\n".into()),
        );
        assert_eq!(state.value, "jane@example.com");
        assert_eq!(state.cursor, 16);
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let state = EmailFieldReducer::reduce(typed("a"), EmailFieldIntent::MoveRight);
        assert_eq!(state.cursor, 1);
        let state = EmailFieldReducer::reduce(state, EmailFieldIntent::Clear);
        assert_eq!(state, EmailFieldState::default());
    }
}
