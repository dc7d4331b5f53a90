use std::fmt;

use crate::interpreter::EditorState;

/// Cell to highlight when the cursor is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorCell {
    pub text: String,
    /// The cursor sits one past the last character; `text` is a blank.
    pub past_end: bool,
}

/// Content split around the cursor cell, ready for a frontend to style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineView {
    pub head: String,
    pub cursor: Option<CursorCell>,
    pub tail: String,
}

pub fn render(state: &EditorState) -> LineView {
    let buffer = state.buffer();
    let content = buffer.content();

    if !state.cursor_visible() {
        return LineView {
            head: content,
            cursor: None,
            tail: String::new(),
        };
    }

    let cursor = buffer.cursor();
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(cursor).collect();

    let cell = match chars.next() {
        Some(c) => CursorCell {
            text: c.to_string(),
            past_end: false,
        },
        None => CursorCell {
            text: " ".to_string(),
            past_end: true,
        },
    };

    LineView {
        head,
        cursor: Some(cell),
        tail: chars.collect(),
    }
}

impl fmt::Display for LineView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.head)?;
        if let Some(cell) = &self.cursor {
            f.write_str(&cell.text)?;
        }
        f.write_str(&self.tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(tokens: &[&str]) -> EditorState {
        let mut state = EditorState::new();
        for token in tokens {
            state.execute(token);
        }
        state
    }

    #[test]
    fn test_hidden_cursor_renders_content_only() {
        let view = render(&state(&["ahello"]));
        assert_eq!(view.head, "hello");
        assert!(view.cursor.is_none());
        assert_eq!(view.to_string(), "hello");
    }

    #[test]
    fn test_cursor_cell_on_character() {
        let view = render(&state(&["ahello", "^", "l", "."]));
        assert_eq!(view.head, "h");
        assert_eq!(
            view.cursor,
            Some(CursorCell {
                text: "e".to_string(),
                past_end: false
            })
        );
        assert_eq!(view.tail, "llo");
        assert_eq!(view.to_string(), "hello");
    }

    #[test]
    fn test_cursor_cell_past_the_end() {
        let view = render(&state(&["ahello", "l", "."]));
        assert_eq!(view.head, "hello");
        assert!(view.cursor.as_ref().is_some_and(|c| c.past_end));
        assert_eq!(view.tail, "");
        assert_eq!(view.to_string(), "hello ");
    }

    #[test]
    fn test_empty_buffer_with_cursor() {
        let view = render(&state(&["."]));
        assert_eq!(view.head, "");
        assert!(view.cursor.as_ref().is_some_and(|c| c.past_end));
    }
}
