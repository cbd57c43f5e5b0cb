//! Intents for the email field.

use crate::mvi::Intent;

/// Editing actions on the email field.
#[derive(Debug, Clone)]
pub enum EmailFieldIntent {
    /// Insert a character at the cursor.
    Insert(char),

    /// Insert pasted text at the cursor. Line breaks are dropped.
    Paste(String),

    /// Delete the character before the cursor.
    Backspace,

    /// Delete the character under the cursor.
    Delete,

    MoveLeft,
    MoveRight,
    MoveHome,
    MoveEnd,

    /// Empty the field.
    Clear,
}

impl Intent for EmailFieldIntent {}
