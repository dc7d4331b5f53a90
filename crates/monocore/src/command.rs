//! Command tokens and their parsed form

use std::fmt;

/// Listing printed for `?`.
pub const HELP: &str = "\
? - display this help info
. - toggle row cursor on and off
h - move cursor left
l - move cursor right
^ - move cursor to beginning of the line
$ - move cursor to end of the line
w - move cursor to beginning of next word
b - move cursor to beginning of previous word
i - insert <text> before cursor
a - append <text> after cursor
x - delete character at cursor
dw - delete word and trailing spaces at cursor
u - undo previous command
s - show content
q - quit program
";

/// Parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    ToStart,
    ToEnd,
    NextWord,
    PrevWord,
    DeleteChar,
    DeleteWord,
    ToggleCursor,
    /// `i<text>`: insert before the cursor
    Insert(String),
    /// `a<text>`: append after the cursor
    Append(String),
    Undo,
    Repeat,
    Help,
    Quit,
    /// Malformed or unknown token, ignored
    Invalid,
}

impl Command {
    /// Parses one raw input token.
    ///
    /// Tokens carrying surrounding whitespace are rejected outright. Exact
    /// tokens win over the `i`/`a` prefix forms, and those need at least one
    /// character of text.
    pub fn parse(token: &str) -> Self {
        if token.trim() != token {
            return Command::Invalid;
        }

        match token {
            "?" => Command::Help,
            "." => Command::ToggleCursor,
            "h" => Command::MoveLeft,
            "l" => Command::MoveRight,
            "^" => Command::ToStart,
            "$" => Command::ToEnd,
            "w" => Command::NextWord,
            "b" => Command::PrevWord,
            "x" => Command::DeleteChar,
            "dw" => Command::DeleteWord,
            "q" => Command::Quit,
            "u" => Command::Undo,
            "r" => Command::Repeat,
            _ => Self::parse_text_command(token),
        }
    }

    fn parse_text_command(token: &str) -> Self {
        let mut chars = token.chars();
        let prefix = chars.next();
        let text = chars.as_str();

        if text.is_empty() || text.contains(['\n', '\r']) {
            return Command::Invalid;
        }

        match prefix {
            Some('i') => Command::Insert(text.to_string()),
            Some('a') => Command::Append(text.to_string()),
            _ => Command::Invalid,
        }
    }

    /// Commands that snapshot the buffer first and become the repeat target.
    pub fn is_state_changing(&self) -> bool {
        matches!(
            self,
            Command::MoveLeft
                | Command::MoveRight
                | Command::ToStart
                | Command::ToEnd
                | Command::NextWord
                | Command::PrevWord
                | Command::DeleteChar
                | Command::DeleteWord
                | Command::ToggleCursor
                | Command::Insert(_)
                | Command::Append(_)
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::MoveLeft => f.write_str("h"),
            Command::MoveRight => f.write_str("l"),
            Command::ToStart => f.write_str("^"),
            Command::ToEnd => f.write_str("$"),
            Command::NextWord => f.write_str("w"),
            Command::PrevWord => f.write_str("b"),
            Command::DeleteChar => f.write_str("x"),
            Command::DeleteWord => f.write_str("dw"),
            Command::ToggleCursor => f.write_str("."),
            Command::Insert(text) => write!(f, "i{}", text),
            Command::Append(text) => write!(f, "a{}", text),
            Command::Undo => f.write_str("u"),
            Command::Repeat => f.write_str("r"),
            Command::Help => f.write_str("?"),
            Command::Quit => f.write_str("q"),
            Command::Invalid => f.write_str("<invalid>"),
        }
    }
}
