//! State for the email field.

use crate::mvi::UiState;

/// Text buffer with a cursor counted in characters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailFieldState {
    pub value: String,
    /// Cursor position in characters, `0..=value.chars().count()`.
    pub cursor: usize,
}

impl UiState for EmailFieldState {}

impl EmailFieldState {
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the cursor in `value`.
    pub fn cursor_byte(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_byte_handles_multibyte() {
        let state = EmailFieldState {
            value: "é@x".into(),
            cursor: 1,
        };
        assert_eq!(state.cursor_byte(), 2);
        assert_eq!(state.char_len(), 3);
    }
}
