use serde::Serialize;

use crate::buffer::Buffer;
use crate::command::Command;
use crate::history::History;

/// What the caller should do after a command has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Print the rendered line
    Render,
    /// Print the help listing
    Help,
    /// Stop reading commands
    Quit,
}

/// Serializable summary of the editor state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateReport {
    pub content: String,
    pub cursor: usize,
    pub cursor_visible: bool,
    pub history_depth: usize,
    pub last_command: Option<String>,
}

/// Everything a session mutates: buffer, undo history, repeat target and
/// the cursor display flag.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    buffer: Buffer,
    history: History,
    last_command: Option<Command>,
    cursor_visible: bool,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history = History::with_limit(limit);
        self
    }

    pub fn with_cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn last_command(&self) -> Option<&Command> {
        self.last_command.as_ref()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Parses and dispatches one raw token.
    pub fn execute(&mut self, token: &str) -> Outcome {
        let command = Command::parse(token);
        if command == Command::Invalid {
            log::trace!("Ignoring token {:?}", token);
        }
        self.dispatch(command)
    }

    pub fn dispatch(&mut self, command: Command) -> Outcome {
        log::debug!("Dispatching {}", command);

        if command.is_state_changing() {
            self.history.push(self.buffer.snapshot());
            self.last_command = Some(command.clone());
        }

        match command {
            Command::MoveLeft => self.buffer.move_left(),
            Command::MoveRight => self.buffer.move_right(),
            Command::ToStart => self.buffer.move_to_start(),
            Command::ToEnd => self.buffer.move_to_end(),
            Command::NextWord => self.buffer.next_word(),
            Command::PrevWord => self.buffer.previous_word(),
            Command::DeleteChar => self.buffer.delete_char(),
            Command::DeleteWord => self.buffer.delete_word(),
            Command::ToggleCursor => self.cursor_visible = !self.cursor_visible,
            Command::Insert(text) => self.buffer.insert(&text),
            Command::Append(text) => self.buffer.append(&text),
            Command::Undo => self.undo(),
            Command::Repeat => self.repeat(),
            Command::Help => return Outcome::Help,
            Command::Quit => return Outcome::Quit,
            Command::Invalid => {}
        }

        debug_assert!(self.buffer.cursor() <= self.buffer.len());
        Outcome::Render
    }

    /// Restores the most recent snapshot. The display flag is not part of a
    /// snapshot and stays as it is.
    fn undo(&mut self) {
        match self.history.pop() {
            Some(snapshot) => self.buffer.restore(snapshot),
            None => log::debug!("Nothing to undo"),
        }
    }

    /// Runs the last state-changing command again from the current state,
    /// recording history for it like any other dispatch.
    fn repeat(&mut self) {
        if let Some(command) = self.last_command.clone() {
            self.dispatch(command);
        }
    }

    pub fn report(&self) -> StateReport {
        StateReport {
            content: self.buffer.content(),
            cursor: self.buffer.cursor(),
            cursor_visible: self.cursor_visible,
            history_depth: self.history.len(),
            last_command: self.last_command.as_ref().map(ToString::to_string),
        }
    }
}
