//! Interactive row/action picker for the pin table.
//!
//! The flow is an explicit state machine so it can be driven and tested
//! without a terminal:
//!
//! ```text
//! ListView ──Select file──▶ RowSelected ──Select action──▶ ActionChosen
//!    │  ▲                        │
//!    │  └────────Back────────────┘
//!    └──Select "Exit" / Back / Quit──▶ Exit ◀──"Exit" action / Quit──
//! ```

use ratatui::widgets::ListState;
use ratatui::{DefaultTerminal, Frame, TerminalOptions, Viewport};

use crate::constants;
use crate::error::Result;
use crate::event::{self, Input};
use crate::state::FileEntry;
use crate::ui::menu;

/// Tallest inline viewport the picker will claim.
const MAX_VIEWPORT_HEIGHT: usize = 14;

/// Per-row action offered after a file is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewDetails,
    Unpin,
    CopyCid,
    Exit,
}

impl Action {
    /// Menu order.
    pub const ALL: [Action; 4] = [
        Action::ViewDetails,
        Action::Unpin,
        Action::CopyCid,
        Action::Exit,
    ];

    /// Menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Action::ViewDetails => "0. View details",
            Action::Unpin => "1. Unpin file",
            Action::CopyCid => "2. Copy CID to clipboard",
            Action::Exit => "3. Exit",
        }
    }
}

/// One entry of the file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Index into the file entries.
    File(usize),
    Exit,
}

/// Picker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    /// Choosing a file; `cursor` indexes the choice list.
    ListView { cursor: usize },
    /// File `row` picked; `cursor` indexes [`Action::ALL`].
    RowSelected { row: usize, cursor: usize },
    /// Terminal: run `action` on file `row`.
    ActionChosen { row: usize, action: Action },
    /// Terminal: leave without doing anything.
    Exit,
}

/// File/action picker over a fixed set of entries.
#[derive(Debug)]
pub struct Picker {
    choices: Vec<Choice>,
    labels: Vec<String>,
    state: PickerState,
}

impl Picker {
    /// Builds the choice list: one per file, then "Exit". Long lists also get
    /// "Exit" at the top so it is reachable without scrolling.
    #[must_use]
    pub fn new(entries: &[FileEntry]) -> Self {
        let mut choices: Vec<Choice> = (0..entries.len()).map(Choice::File).collect();
        choices.push(Choice::Exit);
        if choices.len() > constants::PICKER_EXIT_ON_TOP_THRESHOLD {
            choices.insert(0, Choice::Exit);
        }

        let labels = choices
            .iter()
            .map(|choice| match *choice {
                Choice::File(i) => {
                    let entry = &entries[i];
                    format!(
                        "{} ({}, {})",
                        entry.display_name(),
                        entry.kind,
                        entry.display_size()
                    )
                }
                Choice::Exit => constants::LABEL_EXIT.to_string(),
            })
            .collect();

        Self {
            choices,
            labels,
            state: PickerState::ListView { cursor: 0 },
        }
    }

    #[must_use]
    pub fn state(&self) -> PickerState {
        self.state
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Whether the picker reached `ActionChosen` or `Exit`.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            PickerState::ActionChosen { .. } | PickerState::Exit
        )
    }

    /// Applies one input. Finished pickers ignore further input.
    pub fn handle(&mut self, input: Input) {
        self.state = match (self.state, input) {
            (PickerState::ActionChosen { .. } | PickerState::Exit, _) => return,
            (_, Input::Quit) => PickerState::Exit,

            (PickerState::ListView { cursor }, Input::Up) => PickerState::ListView {
                cursor: wrap_prev(cursor, self.choices.len()),
            },
            (PickerState::ListView { cursor }, Input::Down) => PickerState::ListView {
                cursor: wrap_next(cursor, self.choices.len()),
            },
            (PickerState::ListView { cursor }, Input::Select) => match self.choices[cursor] {
                Choice::File(row) => PickerState::RowSelected { row, cursor: 0 },
                Choice::Exit => PickerState::Exit,
            },
            (PickerState::ListView { .. }, Input::Back) => PickerState::Exit,

            (PickerState::RowSelected { row, cursor }, Input::Up) => PickerState::RowSelected {
                row,
                cursor: wrap_prev(cursor, Action::ALL.len()),
            },
            (PickerState::RowSelected { row, cursor }, Input::Down) => PickerState::RowSelected {
                row,
                cursor: wrap_next(cursor, Action::ALL.len()),
            },
            (PickerState::RowSelected { row, cursor }, Input::Select) => match Action::ALL[cursor]
            {
                Action::Exit => PickerState::Exit,
                action => PickerState::ActionChosen { row, action },
            },
            (PickerState::RowSelected { row, .. }, Input::Back) => PickerState::ListView {
                cursor: self
                    .choices
                    .iter()
                    .position(|c| *c == Choice::File(row))
                    .unwrap_or(0),
            },
        };
    }

    /// The chosen `(row, action)`, once the picker is finished with one.
    #[must_use]
    pub fn outcome(&self) -> Option<(usize, Action)> {
        match self.state {
            PickerState::ActionChosen { row, action } => Some((row, action)),
            _ => None,
        }
    }

    fn draw(&self, frame: &mut Frame, entries: &[FileEntry]) {
        let area = frame.area();

        match self.state {
            PickerState::ListView { cursor } => {
                let mut list_state = ListState::default().with_selected(Some(cursor));
                menu::render(
                    frame,
                    area,
                    &self.labels,
                    &mut list_state,
                    constants::TITLE_SELECT_FILE,
                );
            }
            PickerState::RowSelected { row, cursor } => {
                let entry = &entries[row];
                let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
                let title = format!(
                    "{} for {} ({})",
                    constants::TITLE_CHOOSE_ACTION,
                    entry.display_name(),
                    entry.cid
                );
                let mut list_state = ListState::default().with_selected(Some(cursor));
                menu::render(frame, area, &labels, &mut list_state, &title);
            }
            PickerState::ActionChosen { .. } | PickerState::Exit => {}
        }
    }
}

fn wrap_next(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (cursor + 1) % len
    }
}

fn wrap_prev(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (cursor + len - 1) % len
    }
}

/// Runs the picker in an inline viewport below the already-printed table.
///
/// Returns the chosen row and action, or `None` when the user exited.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or read.
pub fn run(entries: &[FileEntry]) -> Result<Option<(usize, Action)>> {
    let mut picker = Picker::new(entries);

    let rows = picker.choices.len().max(Action::ALL.len()) + 2;
    #[allow(clippy::cast_possible_truncation)]
    let height = rows.min(MAX_VIEWPORT_HEIGHT) as u16;

    let mut terminal = ratatui::try_init_with_options(TerminalOptions {
        viewport: Viewport::Inline(height),
    })?;

    let result = drive(&mut terminal, &mut picker, entries);
    ratatui::restore();
    result?;

    tracing::debug!(state = ?picker.state(), "picker finished");
    Ok(picker.outcome())
}

fn drive(
    terminal: &mut DefaultTerminal,
    picker: &mut Picker,
    entries: &[FileEntry],
) -> Result<()> {
    while !picker.is_finished() {
        terminal.draw(|frame| picker.draw(frame, entries))?;
        picker.handle(event::next_input()?);
    }
    terminal.clear()?;
    Ok(())
}
