//! Terminal key handling for the interactive picker.
//!
//! Raw crossterm events are reduced to the handful of [`Input`]s the picker
//! understands; everything else is ignored.

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};

/// Picker-level input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Move the cursor up one entry.
    Up,
    /// Move the cursor down one entry.
    Down,
    /// Confirm the entry under the cursor.
    Select,
    /// Go back one prompt (or leave from the first one).
    Back,
    /// Leave immediately from any prompt.
    Quit,
}

impl Input {
    /// Maps a key press to an input. Releases and repeats of unrelated keys
    /// return `None`.
    #[must_use]
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Self::Quit)
            }
            KeyCode::Up | KeyCode::Char('k') => Some(Self::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Self::Down),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Self::Select),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => Some(Self::Back),
            _ => None,
        }
    }
}

/// Blocks until the next key press that maps to an [`Input`].
///
/// Resize events are swallowed; the caller redraws after every input anyway.
///
/// # Errors
///
/// Returns an error if reading from the terminal fails.
pub fn next_input() -> std::io::Result<Input> {
    loop {
        if let CrosstermEvent::Key(key) = event::read()? {
            if let Some(input) = Input::from_key(key) {
                return Ok(input);
            }
        }
    }
}
