use ropey::Rope;

use crate::history::Snapshot;

const SPACE: char = ' ';

/// Single line of text plus a cursor expressed as a char index.
///
/// The cursor always satisfies `0 <= cursor <= len`. It may sit one past the
/// last character (after deleting the final char, or moving right off the
/// end), which is where an append lands.
#[derive(Debug, Clone)]
pub struct Buffer {
    text: Rope,
    cursor: usize,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            text: Rope::new(),
            cursor: 0,
        }
    }

    /// Builds a buffer from existing content, clamping the cursor into range.
    pub fn from_content(content: &str, cursor: usize) -> Self {
        let text = Rope::from_str(content);
        let cursor = cursor.min(text.len_chars());
        Self { text, cursor }
    }

    pub fn content(&self) -> String {
        self.text.to_string()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.text.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn char_at(&self, idx: usize) -> Option<char> {
        self.text.get_char(idx)
    }

    fn is_space(&self, idx: usize) -> bool {
        self.char_at(idx) == Some(SPACE)
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Lands on the last character, never past it.
    pub fn move_to_end(&mut self) {
        self.cursor = self.len().saturating_sub(1);
    }

    pub fn next_word(&mut self) {
        let len = self.len();
        let mut idx = self.cursor;

        while idx < len && !self.is_space(idx) {
            idx += 1;
        }
        while idx < len && self.is_space(idx) {
            idx += 1;
        }

        self.cursor = idx;
    }

    pub fn previous_word(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let mut idx = self.cursor - 1;
        while idx > 0 && self.is_space(idx) {
            idx -= 1;
        }
        while idx > 0 && !self.is_space(idx - 1) {
            idx -= 1;
        }

        self.cursor = idx;
    }

    /// Splices `text` in front of the cursor. The cursor index does not move,
    /// so it ends up on the first inserted character.
    pub fn insert(&mut self, text: &str) {
        self.text.insert(self.cursor, text);
    }

    /// Splices `text` after the character under the cursor and advances the
    /// cursor by the inserted length.
    pub fn append(&mut self, text: &str) {
        let added = text.chars().count();

        if self.is_empty() {
            self.text = Rope::from_str(text);
            self.cursor = added.saturating_sub(1);
            return;
        }

        let at = (self.cursor + 1).min(self.len());
        self.text.insert(at, text);
        self.cursor += added;
    }

    pub fn delete_char(&mut self) {
        if self.cursor < self.len() {
            self.text.remove(self.cursor..self.cursor + 1);
        }
    }

    /// Removes the word under the cursor together with its trailing spaces.
    pub fn delete_word(&mut self) {
        let len = self.len();
        if self.cursor >= len {
            return;
        }

        let mut start = self.cursor;
        while start > 0 && !self.is_space(start - 1) {
            start -= 1;
        }

        let mut end = self.cursor;
        while end < len && !self.is_space(end) {
            end += 1;
        }
        while end < len && self.is_space(end) {
            end += 1;
        }

        self.text.remove(start..end);
        self.cursor = start;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            content: self.content(),
            cursor: self.cursor,
        }
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.text = Rope::from_str(&snapshot.content);
        self.cursor = snapshot.cursor.min(self.text.len_chars());
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}
